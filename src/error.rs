use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Request-scoped errors, rendered as plain-text responses.
///
/// The calling platform only distinguishes status codes; error bodies are
/// short human-readable strings rather than structured JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Signature missing, malformed, or failing the cryptographic check.
    #[error("{0}")]
    Unauthorized(String),

    /// Request authenticated but the payload shape is unusable.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// The single rejection used for every unauthenticated outcome.
    pub fn bad_signature() -> Self {
        ApiError::Unauthorized("Bad request signature".to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            // Internal details stay in the log, not on the wire.
            error!(status = %status, "Request failed: {}", self);
            return (status, "Internal server error").into_response();
        }

        warn!(status = %status, "Request rejected: {}", self);
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::bad_signature().status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::BadRequest("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_signature_message() {
        assert_eq!(ApiError::bad_signature().to_string(), "Bad request signature");
    }
}
