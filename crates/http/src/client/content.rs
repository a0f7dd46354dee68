//! Portfolio content endpoints
//!
//! Reads are public so the marketing pages can render without a session;
//! every write goes through [`AuthenticatedFolioClient`].

use super::{AuthenticatedFolioClient, ClientError, PublicFolioClient, paths};
use crate::types::{AboutMe, Project, SocialLink};
use reqwest::Method;

impl PublicFolioClient {
    pub async fn get_about(&self) -> Result<AboutMe, ClientError> {
        self.execute(self.request(Method::GET, paths::ABOUT)).await
    }

    pub async fn list_social_links(&self) -> Result<Vec<SocialLink>, ClientError> {
        self.execute(self.request(Method::GET, paths::SOCIAL_LINKS))
            .await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.execute(self.request(Method::GET, paths::PROJECTS)).await
    }
}

impl AuthenticatedFolioClient {
    /// Replace the "about me" content
    pub async fn update_about(&self, about: &AboutMe) -> Result<AboutMe, ClientError> {
        let req = self.request(Method::PUT, paths::ABOUT).json(about);
        self.execute(req).await
    }

    pub async fn create_social_link(&self, link: &SocialLink) -> Result<SocialLink, ClientError> {
        let req = self.request(Method::POST, paths::SOCIAL_LINKS).json(link);
        self.execute(req).await
    }

    pub async fn update_social_link(
        &self,
        id: &str,
        link: &SocialLink,
    ) -> Result<SocialLink, ClientError> {
        let req = self
            .request(Method::PUT, &format!("{}/{id}", paths::SOCIAL_LINKS))
            .json(link);
        self.execute(req).await
    }

    pub async fn delete_social_link(&self, id: &str) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, &format!("{}/{id}", paths::SOCIAL_LINKS));
        self.execute(req).await
    }

    pub async fn create_project(&self, project: &Project) -> Result<Project, ClientError> {
        let req = self.request(Method::POST, paths::PROJECTS).json(project);
        self.execute(req).await
    }

    pub async fn update_project(&self, id: &str, project: &Project) -> Result<Project, ClientError> {
        let req = self
            .request(Method::PUT, &format!("{}/{id}", paths::PROJECTS))
            .json(project);
        self.execute(req).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, &format!("{}/{id}", paths::PROJECTS));
        self.execute(req).await
    }
}
