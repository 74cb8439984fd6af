//! Data-access error types.

use serde_json::Value;
use thiserror::Error;

/// Failures funneled out of [`ApiService`](super::ApiService)
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, DNS or protocol failure before a response arrived
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The bounded upload did not finish in time
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// HTTP 401; `auth_failed` has already been published
    #[error("Authentication failed")]
    Unauthorized { body: Value },

    /// Any other non-2xx response
    #[error("API error {status}: {body}")]
    Status { status: u16, body: Value },

    /// The response body did not match the requested shape
    #[error("Failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },
}

impl ApiError {
    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Parsed error body, when the server sent one
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Unauthorized { body } | ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

/// Result type for data-access operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_and_body_accessors() {
        let err = ApiError::Status {
            status: 503,
            body: json!({"reason": "maintenance"}),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.body(), Some(&json!({"reason": "maintenance"})));
        assert!(!err.is_unauthorized());

        let err = ApiError::Unauthorized { body: Value::Null };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());

        let err = ApiError::Timeout(60);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Request timed out after 60 seconds");
    }
}
