//! Frontend configuration

use chrono::Duration;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Lifetime of the `accessToken` cookie
    pub const ACCESS_TOKEN_LIFETIME_DAYS: i64 = 2;

    /// Lifetime of the refresh-derived cookies (`refreshToken`, `userId`, `roleName`)
    pub const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 7;

    /// Stored values that mean "no token"
    pub const SENTINEL_VALUES: [&'static str; 3] = ["undefined", "null", ""];

    /// Role that triggers the sudo-mode warning on login
    pub const ADMIN_ROLE: &'static str = "admin";

    pub const ADMIN_WARNING_TITLE: &'static str = "Sudo mode";
    pub const ADMIN_WARNING_MESSAGE: &'static str = "You are logged in as admin, be careful";

    pub fn access_token_lifetime() -> Duration {
        Duration::days(Self::ACCESS_TOKEN_LIFETIME_DAYS)
    }

    pub fn refresh_token_lifetime() -> Duration {
        Duration::days(Self::REFRESH_TOKEN_LIFETIME_DAYS)
    }
}

/// Remote API configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Base URL baked in at build time, e.g. `FOLIO_API_URL=https://api.example.com trunk build`
    pub const BUILD_BASE_URL: Option<&'static str> = option_env!("FOLIO_API_URL");

    /// Base URL for API calls: the build-time value, else the page origin
    pub fn base_url() -> Option<String> {
        if let Some(url) = Self::BUILD_BASE_URL.filter(|url| !url.is_empty()) {
            return Some(url.to_string());
        }

        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .filter(|origin| !origin.is_empty())
    }
}

/// UI configuration
pub struct UiConfig;

impl UiConfig {
    /// How long a toast stays on screen
    pub const TOAST_TIMEOUT_MS: u32 = 5_000;

    /// Local storage key for the sidebar collapsed flag
    pub const SIDEBAR_COLLAPSED_KEY: &'static str = "sidebar_collapsed";
}
