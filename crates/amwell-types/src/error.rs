//! Typed error definitions for the dashboard API client.
//!
//! All errors are designed to be:
//!
//! - **Serializable** for diagnostics via serde
//! - **Displayable** as user-facing strings via the Display trait
//! - **Matchable** for recovery logic via enum variants

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the authenticated API client.
///
/// Stores keep the `Display` rendering of these in their `error` signal;
/// the variants exist so the client can distinguish recoverable 401s from
/// terminal session failures.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "details")]
pub enum ApiError {
    /// 401 received after the single retry budget was spent
    #[error("Not authorized. Please sign in again.")]
    Unauthorized,

    /// Token refresh was impossible or failed; the session is over
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,

    /// 403 response; surfaced as-is, never retried
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Server-provided explanation, if any
        message: String,
    },

    /// Any other non-success HTTP status with a message body
    #[error("{message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Display-ready message (server message or generic fallback)
        message: String,
    },

    /// Transport failure with no response at all
    #[error("Network error: {message}")]
    Network {
        /// Underlying fetch failure description
        message: String,
    },

    /// Response body could not be decoded into the expected shape
    #[error("Unexpected response: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
    },
}

impl ApiError {
    /// Build the error for a non-success status, picking the variant the
    /// status maps to. `message` should already be display-ready.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden { message },
            _ => ApiError::Api { status, message },
        }
    }

    /// Whether this error ends the current session (stored credentials
    /// are gone and the user must log in again).
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = ApiError::Api { status: 422, message: "Name is required".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Api"));
        assert!(json.contains("Name is required"));

        let deserialized: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Forbidden { message: "admin role required".to_string() };
        assert_eq!(format!("{}", err), "Forbidden: admin role required");

        let err = ApiError::Api { status: 500, message: "Internal error".to_string() };
        assert_eq!(format!("{}", err), "Internal error");
    }

    #[test]
    fn test_from_status_mapping() {
        assert_eq!(ApiError::from_status(401, "x".into()), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(403, "no".into()),
            ApiError::Forbidden { message: "no".into() }
        );
        assert_eq!(
            ApiError::from_status(404, "missing".into()),
            ApiError::Api { status: 404, message: "missing".into() }
        );
    }

    #[test]
    fn test_only_session_expiry_is_terminal() {
        assert!(ApiError::SessionExpired.is_terminal());
        assert!(!ApiError::Unauthorized.is_terminal());
        assert!(!ApiError::Network { message: "offline".into() }.is_terminal());
    }
}
