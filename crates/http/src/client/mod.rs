//! Folio HTTP client
//!
//! Two client types keep authentication requirements visible in signatures:
//! [`PublicFolioClient`] for the login and public content endpoints, and
//! [`AuthenticatedFolioClient`] for admin endpoints that need a bearer token.

pub mod auth;
pub mod content;
pub mod error;
pub mod typed;

pub use error::{ClientError, Diagnostic};
pub use typed::{AuthenticatedFolioClient, PublicFolioClient, TypedClientBuilder};

/// Endpoint paths on the remote API
pub mod paths {
    pub const LOGIN: &str = "/auth/login";
    pub const ABOUT: &str = "/about";
    pub const SOCIAL_LINKS: &str = "/social-links";
    pub const PROJECTS: &str = "/projects";
}
