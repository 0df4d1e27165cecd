//! Advocacy article API calls: the `/advocacy/admin/*` CRUD and
//! analytics surface.

use amwell_types::{ApiError, Article, ArticleAnalytics};
use web_sys::FormData;

use super::{api_delete_ack, api_get, api_post_form, api_put_form};

/// Aggregate counters for the advocacy analytics overview.
#[derive(serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvocacyStats {
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default)]
    pub published: u64,
    #[serde(default)]
    pub drafts: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub total_likes: u64,
    #[serde(default)]
    pub total_shares: u64,
}

/// Every article regardless of status (admin view).
pub(crate) async fn get_admin_articles() -> Result<Vec<Article>, ApiError> {
    api_get("/advocacy/admin/all").await
}

/// Multipart because the form may carry a featured image file.
pub(crate) async fn create_article(form: FormData) -> Result<Article, ApiError> {
    api_post_form("/advocacy/admin", form).await
}

pub(crate) async fn update_article(article_id: &str, form: FormData) -> Result<Article, ApiError> {
    api_put_form(&format!("/advocacy/admin/{}", article_id), form).await
}

pub(crate) async fn delete_article(article_id: &str) -> Result<(), ApiError> {
    api_delete_ack(&format!("/advocacy/admin/{}", article_id)).await
}

pub(crate) async fn get_advocacy_stats() -> Result<AdvocacyStats, ApiError> {
    api_get("/advocacy/admin/stats").await
}

pub(crate) async fn get_article_stats(article_id: &str) -> Result<ArticleAnalytics, ApiError> {
    api_get(&format!("/advocacy/admin/stats/{}", article_id)).await
}
