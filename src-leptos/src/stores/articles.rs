//! Advocacy article store: admin list, CRUD, analytics.

use amwell_types::{Article, ArticleAnalytics};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use super::ListStore;
use crate::api::commands::{self, AdvocacyStats};

/// Outcome of resolving an article id against the cached list.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleLookup {
    /// The list fetch is still in flight; try again when it settles.
    Pending,
    Found(Article),
    /// The fetch settled without producing this article. Carries a
    /// display-ready reason (fetch error or plain not-found).
    Missing(String),
}

#[derive(Clone, Copy, Default)]
pub struct ArticlesStore {
    pub list: ListStore<Article>,
    pub stats: RwSignal<Option<AdvocacyStats>>,
}

impl ArticlesStore {
    pub fn new() -> Self {
        Self { list: ListStore::new(), stats: RwSignal::new(None) }
    }

    /// Every article regardless of status (admin list).
    pub fn fetch_all(&self) {
        let list = self.list;
        list.begin_fetch();
        spawn_local(async move {
            list.finish_fetch(commands::get_admin_articles().await);
        });
    }

    pub fn fetch_overview_stats(&self) {
        let stats = self.stats;
        spawn_local(async move {
            match commands::get_advocacy_stats().await {
                Ok(value) => stats.set(Some(value)),
                Err(e) => log::warn!("Advocacy stats fetch failed: {}", e),
            }
        });
    }

    pub async fn create(&self, form: FormData) -> Result<Article, String> {
        match commands::create_article(form).await {
            Ok(article) => {
                self.list.apply_append(article.clone());
                Ok(article)
            }
            Err(e) => {
                let message = e.to_string();
                self.list.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    pub async fn update(&self, article_id: &str, form: FormData) -> Result<Article, String> {
        match commands::update_article(article_id, form).await {
            Ok(article) => {
                self.list.apply_replace(article.clone());
                Ok(article)
            }
            Err(e) => {
                let message = e.to_string();
                self.list.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    pub async fn remove(&self, article_id: &str) -> bool {
        match commands::delete_article(article_id).await {
            Ok(()) => {
                self.list.apply_remove(article_id);
                true
            }
            Err(e) => {
                self.list.error.set(Some(e.to_string()));
                false
            }
        }
    }

    /// Resolve an article id against the cache, distinguishing "still
    /// loading" from "the fetch settled and the article is not there"
    /// so edit views can stop waiting on a stale or deleted id.
    pub fn lookup(&self, article_id: &str) -> ArticleLookup {
        if let Some(article) =
            self.list.items.get().iter().find(|article| article.id == article_id)
        {
            return ArticleLookup::Found(article.clone());
        }
        if self.list.loading.get() {
            return ArticleLookup::Pending;
        }
        ArticleLookup::Missing(
            self.list.error.get().unwrap_or_else(|| "Article not found".to_string()),
        )
    }

    /// Engagement counters for one article (analytics detail page).
    pub async fn fetch_article_stats(&self, article_id: &str) -> Option<ArticleAnalytics> {
        match commands::get_article_stats(article_id).await {
            Ok(analytics) => Some(analytics),
            Err(e) => {
                self.list.error.set(Some(e.to_string()));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amwell_types::ApiError;

    fn article(id: &str) -> Article {
        Article { id: id.to_string(), title: format!("Article {}", id), ..Default::default() }
    }

    #[test]
    fn test_lookup_finds_cached_article() {
        let store = ArticlesStore::new();
        store.list.items.set(vec![article("a1"), article("a2")]);

        assert_eq!(store.lookup("a2"), ArticleLookup::Found(article("a2")));
    }

    #[test]
    fn test_lookup_waits_while_fetch_in_flight() {
        let store = ArticlesStore::new();
        store.list.begin_fetch();

        assert_eq!(store.lookup("a1"), ArticleLookup::Pending);
    }

    #[test]
    fn test_lookup_reports_missing_after_settle() {
        let store = ArticlesStore::new();
        store.list.begin_fetch();
        store.list.finish_fetch(Ok(vec![article("a1")]));

        // Deleted article or stale link: the list is here, the id is not.
        assert_eq!(
            store.lookup("gone"),
            ArticleLookup::Missing("Article not found".to_string())
        );

        // A failed fetch settles the same way, carrying its own reason.
        let store = ArticlesStore::new();
        store.list.begin_fetch();
        store.list.finish_fetch(Err(ApiError::Network { message: "offline".to_string() }));
        assert_eq!(
            store.lookup("a1"),
            ArticleLookup::Missing("Network error: offline".to_string())
        );
    }
}
