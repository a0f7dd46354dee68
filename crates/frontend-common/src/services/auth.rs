//! Authentication API service

use crate::auth::LoginApi;
use crate::client::{ClientError, create_public_client};
use async_trait::async_trait;
use folio_http::types::{LoginRequest, LoginResponse};

/// Authentication API service backed by the shared public client
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthApiService;

impl AuthApiService {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl LoginApi for AuthApiService {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let client = create_public_client()?;
        client.login(request).await
    }
}
