//! Client configuration and initialization

use crate::config::ApiConfig;
pub use folio_http::client::ClientError;
use folio_http::client::{AuthenticatedFolioClient, PublicFolioClient, TypedClientBuilder};
use std::cell::RefCell;

thread_local! {
    static PUBLIC_CLIENT: RefCell<Option<PublicFolioClient>> = const { RefCell::new(None) };
}

/// Get the shared public client (login and public content reads)
pub fn create_public_client() -> Result<PublicFolioClient, ClientError> {
    PUBLIC_CLIENT.with(|cell| {
        if let Some(client) = cell.borrow().as_ref() {
            return Ok(client.clone());
        }

        let base_url = ApiConfig::base_url().ok_or_else(|| {
            ClientError::Configuration("API base URL unavailable outside a browser".into())
        })?;
        let client = TypedClientBuilder::new().base_url(base_url).build_public()?;
        *cell.borrow_mut() = Some(client.clone());
        Ok(client)
    })
}

/// Build a client that sends `access_token` as a bearer token
pub fn create_authenticated_client(
    access_token: &str,
) -> Result<AuthenticatedFolioClient, ClientError> {
    Ok(create_public_client()?.authenticate(access_token))
}
