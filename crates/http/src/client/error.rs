//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Where a failure originated, most specific first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The server answered; this is its response body
    Response { status: u16, body: String },
    /// The request was sent (or attempted) but no usable answer came back
    Request(String),
    /// The client could not even build the request
    Setup(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the server rejected the bearer token
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// HTTP status of the response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Detail for logs: the response body when there is one, else the request
    /// failure, else the setup failure.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Self::BadRequest(body)
            | Self::AuthenticationFailed(body)
            | Self::Forbidden(body)
            | Self::NotFound(body)
            | Self::ServerError { message: body, .. } => Diagnostic::Response {
                status: self.status().unwrap_or_default(),
                body: body.clone(),
            },
            Self::Request(e) => Diagnostic::Request(e.to_string()),
            Self::Serialization(e) => Diagnostic::Request(format!("invalid response body: {e}")),
            Self::Configuration(msg) => Diagnostic::Setup(msg.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_known_codes() {
        let err = ClientError::from_status(reqwest::StatusCode::UNAUTHORIZED, "nope".into());
        assert!(err.is_auth_expired());
        assert_eq!(err.status(), Some(401));

        let err = ClientError::from_status(reqwest::StatusCode::BAD_GATEWAY, "upstream".into());
        assert!(matches!(err, ClientError::ServerError { status: 502, .. }));
        assert!(!err.is_auth_expired());
    }

    #[test]
    fn test_diagnostic_prefers_response_body() {
        let err = ClientError::from_status(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"message":"bad credentials"}"#.into(),
        );
        assert_eq!(
            err.diagnostic(),
            Diagnostic::Response {
                status: 400,
                body: r#"{"message":"bad credentials"}"#.into()
            }
        );
    }

    #[test]
    fn test_diagnostic_for_setup_failure() {
        let err = ClientError::Configuration("base_url is required".into());
        assert_eq!(
            err.diagnostic(),
            Diagnostic::Setup("base_url is required".into())
        );
        assert_eq!(err.status(), None);
    }
}
