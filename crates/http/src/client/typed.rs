//! Type-safe API clients that enforce authentication requirements at compile time

use super::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

const USER_AGENT: &str = concat!("folio-client/", env!("CARGO_PKG_VERSION"));

/// Client for public endpoints that don't require authentication
#[derive(Clone, Debug)]
pub struct PublicFolioClient {
    client: Client,
    base_url: String,
}

/// Client for admin endpoints that require a valid access token
#[derive(Clone, Debug)]
pub struct AuthenticatedFolioClient {
    client: Client,
    base_url: String,
    access_token: String,
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

/// Read a response, decoding JSON on success and mapping error statuses
async fn handle_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        // Empty bodies (204, or 200 with no content) decode as JSON null
        let body = response.text().await?;
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

impl PublicFolioClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = build_http_client(timeout)?;
        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        handle_response(request.send().await?).await
    }

    /// Attach an access token, producing an authenticated client
    pub fn authenticate(self, access_token: impl Into<String>) -> AuthenticatedFolioClient {
        AuthenticatedFolioClient {
            client: self.client,
            base_url: self.base_url,
            access_token: access_token.into(),
        }
    }
}

impl AuthenticatedFolioClient {
    /// Create a new authenticated client
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Ok(PublicFolioClient::new(base_url)?.authenticate(access_token))
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.access_token))
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        handle_response(request.send().await?).await
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Debug, Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicFolioClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicFolioClient::new_with_timeout(base_url, self.timeout)
    }
}
