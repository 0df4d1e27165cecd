//! Partner API calls: CRUD, status toggle, stats.

use amwell_types::{ApiError, Partner};
use web_sys::FormData;

use super::{api_delete_ack, api_get, api_patch, api_post_form, api_put_form};

/// Aggregate counters shown on the partners page.
#[derive(serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PartnerStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub inactive: u64,
    #[serde(default)]
    pub individual: u64,
    #[serde(default)]
    pub business: u64,
}

pub(crate) async fn get_all_partners() -> Result<Vec<Partner>, ApiError> {
    api_get("/partners").await
}

pub(crate) async fn get_partner(partner_id: &str) -> Result<Partner, ApiError> {
    api_get(&format!("/partners/{}", partner_id)).await
}

/// Multipart because the form may carry an image file.
pub(crate) async fn create_partner(form: FormData) -> Result<Partner, ApiError> {
    api_post_form("/partners", form).await
}

pub(crate) async fn update_partner(partner_id: &str, form: FormData) -> Result<Partner, ApiError> {
    api_put_form(&format!("/partners/{}", partner_id), form).await
}

pub(crate) async fn delete_partner(partner_id: &str) -> Result<(), ApiError> {
    api_delete_ack(&format!("/partners/{}", partner_id)).await
}

/// Flip active/inactive; returns the updated record.
pub(crate) async fn toggle_partner_status(partner_id: &str) -> Result<Partner, ApiError> {
    api_patch(&format!("/partners/{}/toggle-status", partner_id)).await
}

pub(crate) async fn get_partner_stats() -> Result<PartnerStats, ApiError> {
    api_get("/partners/stats").await
}
