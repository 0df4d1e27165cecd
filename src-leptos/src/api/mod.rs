//! Authenticated HTTP client for the Plan Am Well REST API.
//!
//! One shared request core: attaches the bearer token from session
//! storage, and on a 401 performs at most one token refresh before
//! replaying the original request once. All endpoint wrappers go
//! through here so the retry contract lives in exactly one place.

mod admin;
mod advocacy;
mod partners;
pub mod session;

use amwell_types::{ApiError, ApiPayload, RefreshDecision};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

const API_BASE: &str = match option_env!("AMWELL_API_URL") {
    Some(url) => url,
    None => "/api/v1",
};

/// Request body variants the core knows how to send.
enum Body {
    None,
    Json(String),
    /// Multipart; the browser sets the Content-Type boundary itself
    Form(FormData),
}

/// Make a GET request to the API
pub async fn api_get<R: DeserializeOwned>(endpoint: &str) -> Result<R, ApiError> {
    let resp = dispatch("GET", endpoint, &Body::None).await?;
    decode_enveloped(resp).await
}

/// Make a POST request with a JSON body
pub async fn api_post<A: Serialize, R: DeserializeOwned>(
    endpoint: &str,
    body: &A,
) -> Result<R, ApiError> {
    let resp = dispatch("POST", endpoint, &json_body(body)?).await?;
    decode_enveloped(resp).await
}

/// Make a PUT request with a JSON body
pub async fn api_put<A: Serialize, R: DeserializeOwned>(
    endpoint: &str,
    body: &A,
) -> Result<R, ApiError> {
    let resp = dispatch("PUT", endpoint, &json_body(body)?).await?;
    decode_enveloped(resp).await
}

/// Make a DELETE request; the response is an acknowledgement with no
/// payload worth decoding.
pub async fn api_delete_ack(endpoint: &str) -> Result<(), ApiError> {
    let resp = dispatch("DELETE", endpoint, &Body::None).await?;
    let status = resp.status();

    #[derive(serde::Deserialize)]
    struct Ack {
        success: bool,
        #[serde(default)]
        message: Option<String>,
    }

    // Some delete endpoints answer 204 with an empty body; a failed
    // decode on a 2xx is still a successful delete.
    match decode_plain::<Ack>(resp).await {
        Ok(Ack { success: true, .. }) | Err(_) => Ok(()),
        Ok(Ack { success: false, message }) => Err(ApiError::Api {
            status,
            message: message.unwrap_or_else(|| "Operation failed".to_string()),
        }),
    }
}

/// Make a PATCH request with no body (status toggles)
pub async fn api_patch<R: DeserializeOwned>(endpoint: &str) -> Result<R, ApiError> {
    let resp = dispatch("PATCH", endpoint, &Body::None).await?;
    decode_enveloped(resp).await
}

/// POST multipart form data (used when an image file is attached)
pub async fn api_post_form<R: DeserializeOwned>(
    endpoint: &str,
    form: FormData,
) -> Result<R, ApiError> {
    let resp = dispatch("POST", endpoint, &Body::Form(form)).await?;
    decode_enveloped(resp).await
}

/// PUT multipart form data
pub async fn api_put_form<R: DeserializeOwned>(
    endpoint: &str,
    form: FormData,
) -> Result<R, ApiError> {
    let resp = dispatch("PUT", endpoint, &Body::Form(form)).await?;
    decode_enveloped(resp).await
}

/// POST where the interesting fields sit beside `success` at the top
/// level instead of under `data` (the auth endpoints).
pub(crate) async fn api_post_root<A: Serialize, R: DeserializeOwned>(
    endpoint: &str,
    body: &A,
) -> Result<R, ApiError> {
    let resp = dispatch("POST", endpoint, &json_body(body)?).await?;
    decode_plain(resp).await
}

fn json_body<A: Serialize>(body: &A) -> Result<Body, ApiError> {
    let json = serde_json::to_string(body)
        .map_err(|e| ApiError::Decode { message: format!("Failed to serialize body: {}", e) })?;
    Ok(Body::Json(json))
}

/// The retry/refresh loop. Returns the first response the decision table
/// says to surface; the caller decodes it.
async fn dispatch(method: &str, endpoint: &str, body: &Body) -> Result<Response, ApiError> {
    let url = format!("{}{}", API_BASE, endpoint);
    let mut retried = false;

    loop {
        let resp = send(method, &url, body).await?;
        let status = resp.status();
        let has_refresh = session::refresh_token().is_some();

        match RefreshDecision::for_response(status, retried, has_refresh) {
            RefreshDecision::Surface => {
                if (200..300).contains(&status) {
                    return Ok(resp);
                }
                return Err(failure(resp).await);
            }
            RefreshDecision::Refresh => {
                retried = true;
                if refresh_access_token().await {
                    log::info!("Access token refreshed, replaying {} {}", method, endpoint);
                    continue;
                }
                session::end_session();
                return Err(ApiError::SessionExpired);
            }
            RefreshDecision::EndSession => {
                session::end_session();
                return Err(ApiError::SessionExpired);
            }
        }
    }
}

/// Build and send one fetch. Network-level failure surfaces without retry.
async fn send(method: &str, url: &str, body: &Body) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    match body {
        Body::None => {}
        Body::Json(json) => opts.set_body(&JsValue::from_str(json)),
        Body::Form(form) => {
            let value: &JsValue = form.as_ref();
            opts.set_body(value);
        }
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network { message: format!("Failed to create request: {:?}", e) })?;

    if matches!(body, Body::Json(_)) {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network { message: format!("Failed to set headers: {:?}", e) })?;
    }

    match session::access_token() {
        Some(token) => {
            request
                .headers()
                .set("Authorization", &format!("Bearer {}", token))
                .map_err(|e| ApiError::Network {
                    message: format!("Failed to set headers: {:?}", e),
                })?;
        }
        None => log::warn!("No access token in storage, sending unauthenticated request"),
    }

    let window = web_sys::window().ok_or(ApiError::Network { message: "No window".to_string() })?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network { message: format!("Fetch failed: {:?}", e) })?;

    resp_value
        .dyn_into()
        .map_err(|_| ApiError::Decode { message: "Response is not a Response".to_string() })
}

/// Decode a 2xx body that may or may not carry the `{ success, data }`
/// envelope.
async fn decode_enveloped<R: DeserializeOwned>(resp: Response) -> Result<R, ApiError> {
    let status = resp.status();
    let payload: ApiPayload<R> = decode_plain(resp).await?;
    payload.into_data().map_err(|message| ApiError::Api { status, message })
}

/// Decode a 2xx body directly into `R`.
async fn decode_plain<R: DeserializeOwned>(resp: Response) -> Result<R, ApiError> {
    let json = JsFuture::from(
        resp.json().map_err(|e| ApiError::Decode { message: format!("{:?}", e) })?,
    )
    .await
    .map_err(|e| ApiError::Decode { message: format!("{:?}", e) })?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode { message: e.to_string() })
}

/// Map a surfaced non-2xx response to the error taxonomy, preferring the
/// server's own message.
async fn failure(resp: Response) -> ApiError {
    let status = resp.status();
    let message = read_error_message(&resp)
        .await
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    ApiError::from_status(status, message)
}

async fn read_error_message(resp: &Response) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        error: Option<String>,
    }

    let json = JsFuture::from(resp.json().ok()?).await.ok()?;
    let body: ErrorBody = serde_wasm_bindgen::from_value(json).ok()?;
    body.message.or(body.error).filter(|m| !m.is_empty())
}

/// Exchange the stored refresh token for a new access token.
///
/// Deliberately bypasses [`dispatch`]: the refresh call itself must never
/// trigger another refresh cycle.
async fn refresh_access_token() -> bool {
    let Some(refresh_token) = session::refresh_token() else {
        return false;
    };

    #[derive(serde::Serialize)]
    struct Req {
        #[serde(rename = "refreshToken")]
        refresh_token: String,
    }
    #[derive(serde::Deserialize)]
    struct Resp {
        success: bool,
        #[serde(default)]
        token: Option<String>,
    }

    let Ok(body) = serde_json::to_string(&Req { refresh_token }) else {
        return false;
    };

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let url = format!("{}/admin/refreshToken", API_BASE);
    let Ok(request) = Request::new_with_str_and_init(&url, &opts) else {
        return false;
    };
    if request.headers().set("Content-Type", "application/json").is_err() {
        return false;
    }

    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(resp_value) = JsFuture::from(window.fetch_with_request(&request)).await else {
        log::warn!("Token refresh failed: network error");
        return false;
    };
    let Ok(resp) = resp_value.dyn_into::<Response>() else {
        return false;
    };
    if !resp.ok() {
        log::warn!("Token refresh rejected with status {}", resp.status());
        return false;
    }

    let Ok(json_promise) = resp.json() else {
        return false;
    };
    let Ok(json) = JsFuture::from(json_promise).await else {
        return false;
    };
    let Ok(parsed) = serde_wasm_bindgen::from_value::<Resp>(json) else {
        return false;
    };

    match parsed.token.filter(|_| parsed.success) {
        Some(token) => {
            session::store_access_token(&token);
            true
        }
        None => false,
    }
}

// Re-export command wrappers
pub mod commands {
    pub use super::admin::*;
    pub use super::advocacy::*;
    pub use super::partners::*;
}
