//! Session token model and the 401 recovery contract.
//!
//! The token pair lives in browser storage; this module only defines its
//! shape and the *decision table* the API client follows when a request
//! comes back 401. Keeping the decision pure makes the single-retry
//! guarantee testable on the host.

use serde::{Deserialize, Serialize};

/// The credential pair returned by login and registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTokens {
    /// Short-lived bearer token attached to every request
    #[serde(rename = "token")]
    pub access_token: String,
    /// Longer-lived token exchanged for a new access token on 401
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

impl AuthTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self { access_token: access_token.into(), refresh_token }
    }
}

/// What the API client does with a response, given the retry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    /// Hand the response to the caller (success, or an error that is
    /// never recovered locally, e.g. 403)
    Surface,
    /// Call the refresh endpoint, then replay the request once
    Refresh,
    /// Clear stored credentials and navigate to the login screen
    EndSession,
}

impl RefreshDecision {
    /// Decide the recovery action for a response status.
    ///
    /// Encodes the contract: exactly one refresh per request, refresh only
    /// when a refresh token exists, and nothing but 401 ever refreshes.
    pub fn for_response(status: u16, already_retried: bool, has_refresh_token: bool) -> Self {
        if status != 401 {
            return RefreshDecision::Surface;
        }
        if already_retried {
            // Second 401 on the replayed request: surface, never loop.
            return RefreshDecision::Surface;
        }
        if has_refresh_token {
            RefreshDecision::Refresh
        } else {
            RefreshDecision::EndSession
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passes_through() {
        assert_eq!(RefreshDecision::for_response(200, false, true), RefreshDecision::Surface);
        assert_eq!(RefreshDecision::for_response(204, false, false), RefreshDecision::Surface);
    }

    #[test]
    fn test_first_401_with_refresh_token_refreshes() {
        assert_eq!(RefreshDecision::for_response(401, false, true), RefreshDecision::Refresh);
    }

    #[test]
    fn test_401_without_refresh_token_ends_session() {
        assert_eq!(RefreshDecision::for_response(401, false, false), RefreshDecision::EndSession);
    }

    #[test]
    fn test_retried_request_never_refreshes_again() {
        // Even with a refresh token available, the replayed request gets
        // exactly zero further refresh cycles.
        assert_eq!(RefreshDecision::for_response(401, true, true), RefreshDecision::Surface);
        assert_eq!(RefreshDecision::for_response(401, true, false), RefreshDecision::Surface);
    }

    #[test]
    fn test_403_is_never_retried() {
        assert_eq!(RefreshDecision::for_response(403, false, true), RefreshDecision::Surface);
    }

    #[test]
    fn test_tokens_deserialize_from_login_payload() {
        let tokens: AuthTokens =
            serde_json::from_str(r#"{ "token": "acc-1", "refreshToken": "ref-1" }"#)
                .expect("valid payload");
        assert_eq!(tokens.access_token, "acc-1");
        assert_eq!(tokens.refresh_token.as_deref(), Some("ref-1"));

        // Older responses omit the refresh token entirely.
        let tokens: AuthTokens =
            serde_json::from_str(r#"{ "token": "acc-2" }"#).expect("valid payload");
        assert!(tokens.refresh_token.is_none());
    }
}
