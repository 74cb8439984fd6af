//! Shell Error Types
//!
//! Page load failures and their HTTP responses. An expired session sends
//! the browser to the sign-in page; everything else is a JSON error body.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::api::ApiError;

/// Shell error types
#[derive(Error, Debug)]
pub enum ShellError {
    /// The API rejected the session; carries the sign-in URL
    #[error("Session expired, sign in at {0}")]
    SignIn(String),

    /// A statistics call failed
    #[error("Upstream error: {0}")]
    Upstream(#[source] ApiError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShellError {
    /// Map a page load failure; 401 becomes a sign-in redirect
    pub fn from_api(error: ApiError, sign_in_url: &str) -> Self {
        if error.is_unauthorized() {
            ShellError::SignIn(sign_in_url.to_string())
        } else {
            ShellError::Upstream(error)
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ShellError::SignIn(_) => "UNAUTHORIZED",
            ShellError::Upstream(ApiError::Transport(_)) => "UPSTREAM_UNAVAILABLE",
            ShellError::Upstream(ApiError::Timeout(_)) => "UPSTREAM_TIMEOUT",
            ShellError::Upstream(ApiError::Decode { .. }) => "UPSTREAM_DECODE_ERROR",
            ShellError::Upstream(_) => "UPSTREAM_ERROR",
            ShellError::Io(_) => "IO_ERROR",
            ShellError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ShellError {
    fn into_response(self) -> Response {
        if let ShellError::SignIn(url) = &self {
            tracing::info!(location = %url, "Redirecting to sign-in");
            return (StatusCode::SEE_OTHER, [(header::LOCATION, url.clone())]).into_response();
        }

        let status = match &self {
            ShellError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let code = self.code();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Page load failed"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for shell handlers
pub type ShellResult<T> = Result<T, ShellError>;
