//! Persisted credential storage
//!
//! The [`SessionStore`] is the only place that reads or writes credential
//! cookies. Everything above it works with `Option<String>`; sentinel strings
//! never leave this module.

pub mod cookies;
pub mod store;

pub use cookies::{BrowserCookieJar, CookieJar, MemoryCookieJar};
pub use store::{CredentialKey, Credentials, SessionStore, StoredCredentials, normalize_token};
