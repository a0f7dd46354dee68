//! Authentication endpoints

use super::{ClientError, PublicFolioClient, paths};
use crate::types::{LoginRequest, LoginResponse};

impl PublicFolioClient {
    /// Exchange email and password for access credentials
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, paths::LOGIN)
            .json(request);
        self.execute(req).await
    }
}
