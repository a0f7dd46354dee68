//! Portfolio content service
//!
//! Admin writes read the access token from the session store at call time, so
//! a page that outlives its session fails with [`ContentError::NotAuthenticated`]
//! instead of sending a stale token.

use crate::auth::error_handler::trigger_auth_error;
use crate::client::{ClientError, create_authenticated_client, create_public_client};
use crate::session::{CookieJar, SessionStore};
use folio_http::client::AuthenticatedFolioClient;
use folio_http::types::{AboutMe, Project, SocialLink};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Not signed in")]
    NotAuthenticated,

    #[error(transparent)]
    Api(#[from] ClientError),

    #[error("Record has no id")]
    MissingId,
}

/// Await an API call and report a rejected token to the global auth handler
pub async fn with_auth_error_handling<T, F>(api_call: F) -> Result<T, ContentError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    match api_call.await {
        Ok(value) => Ok(value),
        Err(error) => {
            if error.is_auth_expired() {
                tracing::warn!("Access token rejected by the API");
                trigger_auth_error();
            }
            Err(error.into())
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContentService<J> {
    store: SessionStore<J>,
}

impl<J: CookieJar> ContentService<J> {
    pub const fn new(store: SessionStore<J>) -> Self {
        Self { store }
    }

    fn client(&self) -> Result<AuthenticatedFolioClient, ContentError> {
        let token = self
            .store
            .access_token()
            .ok_or(ContentError::NotAuthenticated)?;
        Ok(create_authenticated_client(&token)?)
    }

    pub async fn about(&self) -> Result<AboutMe, ContentError> {
        let client = create_public_client()?;
        Ok(client.get_about().await?)
    }

    pub async fn social_links(&self) -> Result<Vec<SocialLink>, ContentError> {
        let client = create_public_client()?;
        Ok(client.list_social_links().await?)
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ContentError> {
        let client = create_public_client()?;
        Ok(client.list_projects().await?)
    }

    pub async fn save_about(&self, about: &AboutMe) -> Result<AboutMe, ContentError> {
        let client = self.client()?;
        with_auth_error_handling(client.update_about(about)).await
    }

    /// Create the link, or update it when it already has an id
    pub async fn save_social_link(&self, link: &SocialLink) -> Result<SocialLink, ContentError> {
        let client = self.client()?;
        match link.id.as_deref() {
            Some(id) => with_auth_error_handling(client.update_social_link(id, link)).await,
            None => with_auth_error_handling(client.create_social_link(link)).await,
        }
    }

    pub async fn delete_social_link(&self, link: &SocialLink) -> Result<(), ContentError> {
        let id = link.id.as_deref().ok_or(ContentError::MissingId)?;
        let client = self.client()?;
        with_auth_error_handling(client.delete_social_link(id)).await
    }

    /// Create the project, or update it when it already has an id
    pub async fn save_project(&self, project: &Project) -> Result<Project, ContentError> {
        let client = self.client()?;
        match project.id.as_deref() {
            Some(id) => with_auth_error_handling(client.update_project(id, project)).await,
            None => with_auth_error_handling(client.create_project(project)).await,
        }
    }

    pub async fn delete_project(&self, project: &Project) -> Result<(), ContentError> {
        let id = project.id.as_deref().ok_or(ContentError::MissingId)?;
        let client = self.client()?;
        with_auth_error_handling(client.delete_project(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::error_handler::{clear_auth_error_callback, set_auth_error_callback};
    use crate::session::MemoryCookieJar;
    use chrono::{Duration, Utc};
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_writes_require_a_stored_token() {
        let jar = MemoryCookieJar::new();
        jar.set("accessToken", "undefined", Utc::now() + Duration::days(1));
        let service = ContentService::new(SessionStore::new(jar));

        let result = service.save_about(&AboutMe::default()).await;
        assert!(matches!(result, Err(ContentError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_delete_requires_an_id() {
        let service = ContentService::new(SessionStore::new(MemoryCookieJar::new()));
        let result = service.delete_project(&Project::default()).await;
        assert!(matches!(result, Err(ContentError::MissingId)));
    }

    #[tokio::test]
    async fn test_rejected_token_triggers_auth_handler() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        set_auth_error_callback(Rc::new(move || counter.set(counter.get() + 1)));

        let result: Result<(), _> = with_auth_error_handling(async {
            Err(ClientError::AuthenticationFailed("expired".into()))
        })
        .await;
        assert!(matches!(result, Err(ContentError::Api(_))));
        assert_eq!(calls.get(), 1);

        let result: Result<(), _> =
            with_auth_error_handling(async { Err(ClientError::NotFound("gone".into())) }).await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);

        clear_auth_error_callback();
    }
}
