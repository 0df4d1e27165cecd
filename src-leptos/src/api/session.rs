//! Browser-storage session service.
//!
//! The credential pair lives in `window.localStorage`; every outgoing
//! request reads the access token from here, and only login, registration
//! and the refresh flow write it. Reads are synchronous and last-write-wins.

use amwell_types::AuthTokens;
use web_sys::Storage;

const ACCESS_TOKEN_KEY: &str = "amwell_token";
const REFRESH_TOKEN_KEY: &str = "amwell_refresh_token";

fn storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// The stored access token, if any.
pub fn access_token() -> Option<String> {
    storage()
        .and_then(|store| store.get_item(ACCESS_TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

/// The stored refresh token, if any.
pub fn refresh_token() -> Option<String> {
    storage()
        .and_then(|store| store.get_item(REFRESH_TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

/// Persist the pair returned by login or registration.
pub fn store_tokens(tokens: &AuthTokens) {
    if let Some(store) = storage() {
        let _ = store.set_item(ACCESS_TOKEN_KEY, &tokens.access_token);
        if let Some(refresh) = &tokens.refresh_token {
            let _ = store.set_item(REFRESH_TOKEN_KEY, refresh);
        }
    }
}

/// Persist a new access token after a successful refresh, keeping the
/// stored refresh token as-is.
pub fn store_access_token(token: &str) {
    if let Some(store) = storage() {
        let _ = store.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Remove both tokens.
pub fn clear() {
    if let Some(store) = storage() {
        let _ = store.remove_item(ACCESS_TOKEN_KEY);
        let _ = store.remove_item(REFRESH_TOKEN_KEY);
    }
}

pub fn is_authenticated() -> bool {
    access_token().is_some()
}

/// Terminal session end: clear credentials and hard-navigate to the
/// login screen. Used when a refresh is impossible or fails.
pub fn end_session() {
    log::warn!("Session ended, redirecting to login");
    clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/auth/login");
    }
}
