//! Credential cookies and their expiry policy

use super::cookies::CookieJar;
use crate::config::AuthConfig;
use chrono::{DateTime, Duration, Utc};

/// The four persisted credential entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    AccessToken,
    RefreshToken,
    UserId,
    RoleName,
}

impl CredentialKey {
    pub const ALL: [Self; 4] = [
        Self::AccessToken,
        Self::RefreshToken,
        Self::UserId,
        Self::RoleName,
    ];

    pub const fn cookie_name(self) -> &'static str {
        match self {
            Self::AccessToken => "accessToken",
            Self::RefreshToken => "refreshToken",
            Self::UserId => "userId",
            Self::RoleName => "roleName",
        }
    }

    /// Only the access token uses the short lifetime; the rest follow the refresh token.
    pub fn lifetime(self) -> Duration {
        match self {
            Self::AccessToken => AuthConfig::access_token_lifetime(),
            Self::RefreshToken | Self::UserId | Self::RoleName => {
                AuthConfig::refresh_token_lifetime()
            }
        }
    }
}

/// Credentials to persist after a successful login
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub role: String,
}

impl Credentials {
    fn value(&self, key: CredentialKey) -> &str {
        match key {
            CredentialKey::AccessToken => &self.access_token,
            CredentialKey::RefreshToken => &self.refresh_token,
            CredentialKey::UserId => &self.user_id,
            CredentialKey::RoleName => &self.role,
        }
    }
}

/// Snapshot of what is currently persisted, already normalized
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredCredentials {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user_id: Option<String>,
    pub role: Option<String>,
}

/// Map stringified-null artifacts to a real absence
pub fn normalize_token(value: Option<String>) -> Option<String> {
    value.filter(|v| !AuthConfig::SENTINEL_VALUES.contains(&v.as_str()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Cookie-backed credential store
#[derive(Clone, Debug, Default)]
pub struct SessionStore<J> {
    jar: J,
}

impl<J: CookieJar> SessionStore<J> {
    pub const fn new(jar: J) -> Self {
        Self { jar }
    }

    pub const fn jar(&self) -> &J {
        &self.jar
    }

    /// Write all four entries, each with its own expiry relative to `now`
    pub fn persist(&self, credentials: &Credentials, now: DateTime<Utc>) {
        for key in CredentialKey::ALL {
            self.jar
                .set(key.cookie_name(), credentials.value(key), now + key.lifetime());
        }
        tracing::debug!(user_id = %credentials.user_id, "Persisted session credentials");
    }

    /// Remove all four entries
    pub fn clear(&self) {
        for key in CredentialKey::ALL {
            self.jar.remove(key.cookie_name());
        }
    }

    /// The access token, with sentinel values treated as absent
    pub fn access_token(&self) -> Option<String> {
        normalize_token(self.jar.get(CredentialKey::AccessToken.cookie_name()))
    }

    pub fn user_id(&self) -> Option<String> {
        non_empty(self.jar.get(CredentialKey::UserId.cookie_name()))
    }

    pub fn role(&self) -> Option<String> {
        non_empty(self.jar.get(CredentialKey::RoleName.cookie_name()))
    }

    pub fn snapshot(&self) -> StoredCredentials {
        StoredCredentials {
            access_token: self.access_token(),
            refresh_token: non_empty(self.jar.get(CredentialKey::RefreshToken.cookie_name())),
            user_id: self.user_id(),
            role: self.role(),
        }
    }
}
