//! Authentication module

pub mod context;
pub mod error_handler;
pub mod guard;
pub mod manager;
pub mod session;

// Re-export commonly used items
pub use context::{AuthContext, AuthProvider, BrowserAuthManager, use_auth};
pub use guard::{GuardDecision, evaluate as evaluate_guard};
pub use manager::{AuthSessionManager, LoginApi, LoginError};
pub use session::Session;
