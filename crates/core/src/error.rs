//! Client error taxonomy.
//!
//! Every remote-call failure is folded into one of these categories at the
//! transport boundary. The display strings are the user-facing notices;
//! `Validation` carries the service's own message verbatim.

use serde::Deserialize;
use thiserror::Error;

/// Result type used across the client surfaces.
pub type ApiResult<T> = Result<T, ApiError>;

/// A categorized remote-call failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The service rejected the request payload (HTTP 400 family).
    #[error("{0}")]
    Validation(String),

    /// The session is no longer valid (HTTP 401); the stored session has
    /// been cleared and the caller must re-authenticate.
    #[error("Session expired. Please login again.")]
    Unauthorized,

    /// The caller lacks permission for this action (HTTP 403).
    #[error("You do not have permission to perform this action.")]
    Forbidden,

    /// The target resource does not exist, or was already removed (HTTP 404).
    #[error("The requested resource was not found.")]
    NotFound,

    /// The service failed (HTTP 5xx).
    #[error("Server error. Please try again later.")]
    Server(u16),

    /// The call never produced an HTTP response (DNS, refused, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but its body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Categorize a non-success HTTP status.
    ///
    /// Statuses outside the table (including 4xx the services are not
    /// documented to return, e.g. 409 from a concurrent decision) surface
    /// the service's message as a `Validation` failure so the caller can
    /// show it and refresh.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            s if s >= 500 => Self::Server(s),
            _ => Self::Validation(message.unwrap_or_else(|| "Invalid request.".to_owned())),
        }
    }

    /// Whether the in-memory session should be discarded for this failure.
    pub fn is_session_expiry(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Extract the human-readable message from a service error body.
///
/// The services answer failures with `{"message": ..}` (some also carry a
/// short `error` code). Non-JSON bodies yield `None`.
pub fn response_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.or(parsed.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table_maps_each_category() {
        assert_eq!(
            ApiError::from_status(400, Some("quantity must be positive".into())),
            ApiError::Validation("quantity must be positive".into())
        );
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, None), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, None), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500, None), ApiError::Server(500));
        assert_eq!(ApiError::from_status(503, None), ApiError::Server(503));
    }

    #[test]
    fn validation_without_body_uses_generic_notice() {
        assert_eq!(
            ApiError::from_status(400, None),
            ApiError::Validation("Invalid request.".into())
        );
    }

    #[test]
    fn undocumented_4xx_surfaces_service_message() {
        let err = ApiError::from_status(409, Some("request already decided".into()));
        assert_eq!(err, ApiError::Validation("request already decided".into()));
    }

    #[test]
    fn only_401_expires_the_session() {
        assert!(ApiError::from_status(401, None).is_session_expiry());
        assert!(!ApiError::from_status(403, None).is_session_expiry());
        assert!(!ApiError::from_status(500, None).is_session_expiry());
    }

    #[test]
    fn message_extraction_prefers_message_field() {
        assert_eq!(
            response_message(r#"{"error":"validation_error","message":"SKU taken"}"#),
            Some("SKU taken".into())
        );
        assert_eq!(
            response_message(r#"{"error":"not_found"}"#),
            Some("not_found".into())
        );
        assert_eq!(response_message("<html>bad gateway</html>"), None);
    }
}
