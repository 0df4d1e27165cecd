//! Admin API calls: auth, users, doctors, growth analytics.

use amwell_types::{ApiError, AuthTokens, Doctor, DoctorStatus, GrowthSummary, User};

use super::{api_get, api_post_root, api_put};

/// Auth responses put the tokens either beside `success` or nested
/// under `data`, depending on the endpoint generation.
#[derive(serde::Deserialize)]
struct AuthResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<AuthTokens>,
    #[serde(default)]
    token: Option<String>,
    #[serde(rename = "refreshToken", default)]
    refresh_token: Option<String>,
}

impl AuthResponse {
    fn into_tokens(self) -> Result<AuthTokens, ApiError> {
        if let Some(tokens) = self.data {
            return Ok(tokens);
        }
        if let Some(token) = self.token {
            return Ok(AuthTokens::new(token, self.refresh_token));
        }
        Err(ApiError::Decode {
            message: self.message.unwrap_or_else(|| "Token not found in response".to_string()),
        })
    }
}

pub(crate) async fn admin_login(email: &str, password: &str) -> Result<AuthTokens, ApiError> {
    let response: AuthResponse = api_post_root(
        "/admin/adminLogin",
        &serde_json::json!({
            "email": email.trim(),
            "password": password
        }),
    )
    .await?;
    response.into_tokens()
}

pub(crate) async fn admin_register(
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthTokens, ApiError> {
    let response: AuthResponse = api_post_root(
        "/admin/adminRegister",
        &serde_json::json!({
            "name": name.trim(),
            "email": email.trim(),
            "password": password
        }),
    )
    .await?;
    response.into_tokens()
}

pub(crate) async fn get_all_users() -> Result<Vec<User>, ApiError> {
    api_get("/admin/users").await
}

pub(crate) async fn get_user(user_id: &str) -> Result<User, ApiError> {
    api_get(&format!("/admin/user/{}", user_id)).await
}

pub(crate) async fn get_all_doctors() -> Result<Vec<Doctor>, ApiError> {
    api_get("/admin/doctors").await
}

pub(crate) async fn get_pending_doctors() -> Result<Vec<Doctor>, ApiError> {
    api_get("/admin/doctors/pending").await
}

/// Set a doctor's approval status; returns the updated record.
pub(crate) async fn update_doctor_status(
    doctor_id: &str,
    status: DoctorStatus,
) -> Result<Doctor, ApiError> {
    api_put(
        &format!("/admin/doctors/{}", doctor_id),
        &serde_json::json!({
            "status": status.as_str()
        }),
    )
    .await
}

pub(crate) async fn get_combined_growth(months: u32) -> Result<GrowthSummary, ApiError> {
    api_get(&format!("/admin/combinedGrowth?months={}", months)).await
}
