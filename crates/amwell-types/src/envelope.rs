//! The `{ success, data }` response envelope.
//!
//! Most backend endpoints wrap their payload in an envelope, but a few
//! (the growth summary, some legacy partner responses) return the payload
//! bare. [`ApiPayload`] accepts both shapes so callers never branch on it.

use serde::Deserialize;

/// Standard response wrapper used by most endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// The payload; absent on failures and some ack-only responses
    #[serde(default)]
    pub data: Option<T>,
    /// Human-readable message, usually present on failures
    #[serde(default)]
    pub message: Option<String>,
    /// Item count sent alongside list payloads
    #[serde(default)]
    pub count: Option<u64>,
}

/// A response body that is either enveloped or the bare payload.
///
/// The envelope arm is tried first and only matches maps carrying a
/// boolean `success` key, so bare objects and arrays fall through to
/// `Bare` instead of being swallowed by an all-optional envelope.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiPayload<T> {
    /// `{ success, data, ... }`
    Enveloped(Envelope<T>),
    /// The payload with no wrapper
    Bare(T),
}

impl<T> ApiPayload<T> {
    /// Extract the payload, or the server's failure message.
    ///
    /// Returns `Err` with a display-ready message when the envelope
    /// carried no data; the caller attaches the HTTP status.
    pub fn into_data(self) -> Result<T, String> {
        match self {
            ApiPayload::Bare(value) => Ok(value),
            ApiPayload::Enveloped(Envelope { data: Some(value), .. }) => Ok(value),
            ApiPayload::Enveloped(Envelope { message: Some(message), .. }) => Err(message),
            ApiPayload::Enveloped(_) => Err("Response contained no data".to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Partner;

    #[test]
    fn test_enveloped_list() {
        let body = r#"{ "success": true, "count": 1, "data": [
            { "_id": "p1", "name": "Acme Health", "partnerType": "business", "isActive": true }
        ]}"#;

        let payload: ApiPayload<Vec<Partner>> = serde_json::from_str(body).unwrap();
        let partners = payload.into_data().unwrap();
        assert_eq!(partners.len(), 1);
        assert_eq!(partners[0].id, "p1");
    }

    #[test]
    fn test_bare_list() {
        let body = r#"[
            { "_id": "p1", "name": "Acme Health", "partnerType": "individual", "isActive": false }
        ]"#;

        let payload: ApiPayload<Vec<Partner>> = serde_json::from_str(body).unwrap();
        assert_eq!(payload.into_data().unwrap().len(), 1);
    }

    #[test]
    fn test_failure_envelope_surfaces_message() {
        let body = r#"{ "success": false, "message": "Partner not found" }"#;

        let payload: ApiPayload<Partner> = serde_json::from_str(body).unwrap();
        assert_eq!(payload.into_data().unwrap_err(), "Partner not found");
    }

    #[test]
    fn test_empty_envelope_has_fallback_message() {
        let body = r#"{ "success": true }"#;

        let payload: ApiPayload<Partner> = serde_json::from_str(body).unwrap();
        assert_eq!(payload.into_data().unwrap_err(), "Response contained no data");
    }

    #[test]
    fn test_bare_object_without_success_key() {
        // A map without `success` must not be mistaken for an envelope.
        let body = r#"{ "_id": "p2", "name": "Solo", "partnerType": "individual", "isActive": true }"#;

        let payload: ApiPayload<Partner> = serde_json::from_str(body).unwrap();
        assert_eq!(payload.into_data().unwrap().id, "p2");
    }
}
