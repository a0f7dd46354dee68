//! Session handling, authentication and shared UI pieces of the Folio admin
//! front-end.

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod forms;
pub mod hooks;
pub mod notifications;
pub mod services;
pub mod session;

pub use auth::{AuthContext, AuthProvider, Session};
pub use client::{create_authenticated_client, create_public_client};
pub use components::{ErrorBanner, Spinner};
pub use config::{ApiConfig, AuthConfig, UiConfig};
pub use notifications::{Notifier, ToastProvider};
