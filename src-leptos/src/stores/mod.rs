//! Reactive resource stores.
//!
//! Every listed resource (doctors, users, partners, articles) shares the
//! same repository shape: a cached list plus loading/error flags, with
//! mutations reconciled through the pure functions in
//! `amwell_types::cache`. Fetch failures keep the previous cache
//! (stale-but-available); mutation failures leave it untouched.

mod articles;
mod doctors;
mod growth;
mod partners;
mod users;

pub use articles::{ArticleLookup, ArticlesStore};
pub use doctors::DoctorsStore;
pub use growth::GrowthStore;
pub use partners::PartnersStore;
pub use users::UsersStore;

use amwell_types::cache::{self, Keyed};
use amwell_types::ApiError;
use leptos::prelude::*;

/// Reactive list cache shared by all resource stores.
pub struct ListStore<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Key of the row a mutation is in flight for, so rows can show
    /// their own spinner without blocking the whole list
    pub mutating_key: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListStore<T> {}

impl<T: Keyed + Clone + Send + Sync + 'static> ListStore<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(vec![]),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            mutating_key: RwSignal::new(None),
        }
    }

    pub fn begin_fetch(&self) {
        self.loading.set(true);
        self.error.set(None);
    }

    /// Apply a list-fetch result: replace the cache on success, keep the
    /// stale cache and record the error on failure.
    pub fn finish_fetch(&self, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(items) => self.items.set(items),
            Err(e) => self.error.set(Some(e.to_string())),
        }
        self.loading.set(false);
    }

    pub fn apply_append(&self, item: T) {
        self.items.update(|list| cache::append(list, item));
    }

    pub fn apply_replace(&self, item: T) {
        self.items.update(|list| {
            cache::replace(list, item);
        });
    }

    /// Merge a partial fetch (e.g. a pending subset) into the cache
    /// without dropping rows the fetch did not cover.
    pub fn apply_upsert_all(&self, fetched: Vec<T>) {
        self.items.update(|list| {
            for item in fetched {
                cache::upsert(list, item);
            }
        });
    }

    pub fn apply_remove(&self, key: &str) {
        self.items.update(|list| {
            cache::remove(list, key);
        });
    }

    /// Apply a row-mutation outcome: merge the canonical record on
    /// success, record the error and leave the cache untouched on
    /// failure. Clears the row busy marker either way.
    pub fn finish_mutation(&self, result: Result<T, ApiError>) {
        match result {
            Ok(item) => self.apply_replace(item),
            Err(e) => self.error.set(Some(e.to_string())),
        }
        self.mutating_key.set(None);
    }
}

impl<T: Keyed + Clone + Send + Sync + 'static> Default for ListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amwell_types::Partner;

    fn partner(id: &str, active: bool) -> Partner {
        Partner {
            id: id.to_string(),
            name: format!("Partner {}", id),
            is_active: active,
            ..Default::default()
        }
    }

    #[test]
    fn test_failed_mutation_keeps_cache_and_records_error() {
        let store: ListStore<Partner> = ListStore::new();
        store.items.set(vec![partner("p1", true)]);
        store.mutating_key.set(Some("p1".to_string()));

        store.finish_mutation(Err(ApiError::Api {
            status: 500,
            message: "toggle failed".to_string(),
        }));

        // The cached row is untouched, the error is display-ready, and
        // the row busy marker is released.
        assert!(store.items.get_untracked()[0].is_active);
        assert_eq!(store.error.get_untracked().as_deref(), Some("toggle failed"));
        assert!(store.mutating_key.get_untracked().is_none());
    }

    #[test]
    fn test_successful_mutation_replaces_only_the_row() {
        let store: ListStore<Partner> = ListStore::new();
        store.items.set(vec![partner("p1", true), partner("p2", true)]);
        store.mutating_key.set(Some("p1".to_string()));

        store.finish_mutation(Ok(partner("p1", false)));

        let items = store.items.get_untracked();
        assert!(!items[0].is_active);
        assert!(items[1].is_active);
        assert!(store.error.get_untracked().is_none());
        assert!(store.mutating_key.get_untracked().is_none());
    }

    #[test]
    fn test_fetch_failure_keeps_stale_items() {
        let store: ListStore<Partner> = ListStore::new();
        store.items.set(vec![partner("p1", true)]);
        store.begin_fetch();

        store.finish_fetch(Err(ApiError::Network { message: "offline".to_string() }));

        assert_eq!(store.items.get_untracked().len(), 1);
        assert!(store.error.get_untracked().is_some());
        assert!(!store.loading.get_untracked());
    }

    #[test]
    fn test_upsert_all_merges_without_dropping_rows() {
        let store: ListStore<Partner> = ListStore::new();
        store.items.set(vec![partner("p1", true), partner("p2", true)]);

        store.apply_upsert_all(vec![partner("p2", false), partner("p3", true)]);

        let items = store.items.get_untracked();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_active);
        assert!(!items[1].is_active);
        assert_eq!(items[2].id, "p3");
    }
}
