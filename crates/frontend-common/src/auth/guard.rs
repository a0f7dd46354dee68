//! Route guard predicate

use crate::session::{CookieJar, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content
    Allow,
    /// Credentials were wiped; send the user to the login screen
    RedirectToLogin,
}

/// Decide whether protected content may render.
///
/// Requires a non-sentinel access token and a user id. Anything less counts as
/// signed out, and whatever partial credentials remain are removed.
pub fn evaluate<J: CookieJar>(store: &SessionStore<J>) -> GuardDecision {
    let credentials = store.snapshot();

    if credentials.access_token.is_some() && credentials.user_id.is_some() {
        GuardDecision::Allow
    } else {
        tracing::debug!("Route guard rejected stored credentials");
        store.clear();
        GuardDecision::RedirectToLogin
    }
}
