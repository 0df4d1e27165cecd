//! Advocacy article model and analytics.

use serde::{Deserialize, Serialize};

use crate::cache::Keyed;

/// Publication state of an article.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

/// Author block attached to an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// One referrer source in the analytics breakdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferrerCount {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub count: u64,
}

/// Read-only engagement counters for one article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleAnalytics {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub referrers: Vec<ReferrerCount>,
}

/// Featured image reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeaturedImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// An advocacy article as returned by `/advocacy`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Article body as sanitized HTML
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Name of the partner organization this article belongs to
    #[serde(default)]
    pub partner: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
    #[serde(default)]
    pub author: Option<ArticleAuthor>,
    #[serde(default)]
    pub analytics: Option<ArticleAnalytics>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Keyed for Article {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_article_defaults() {
        let article: Article =
            serde_json::from_str(r#"{ "_id": "a1", "title": "Know Your Rights" }"#).unwrap();
        assert_eq!(article.status, ArticleStatus::Draft);
        assert!(article.tags.is_empty());
        assert!(article.analytics.is_none());
    }

    #[test]
    fn test_analytics_block() {
        let article: Article = serde_json::from_str(
            r#"{
                "_id": "a2",
                "title": "Maternal Health",
                "status": "published",
                "analytics": {
                    "views": 120,
                    "likes": 14,
                    "shares": 3,
                    "comments": 2,
                    "referrers": [{ "source": "facebook", "count": 80 }]
                }
            }"#,
        )
        .unwrap();

        let analytics = article.analytics.unwrap();
        assert_eq!(analytics.views, 120);
        assert_eq!(analytics.referrers[0].source, "facebook");
    }
}
