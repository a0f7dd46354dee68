//! In-memory session state

/// What the application currently knows about the signed-in user
///
/// Only its cookie projection survives a reload; see [`crate::session`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user_id: Option<String>,
    pub access_token: Option<String>,
    pub role: Option<String>,
    pub loading: bool,
}

impl Session {
    /// Whether the resolved role is the admin role
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(crate::config::AuthConfig::ADMIN_ROLE)
    }

    #[must_use]
    pub fn with_loading(&self, loading: bool) -> Self {
        Self {
            loading,
            ..self.clone()
        }
    }
}
