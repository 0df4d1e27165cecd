//! Dashboard growth summary store.

use amwell_types::GrowthSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::commands;

/// Growth summary for the selected month window.
///
/// `data == None` with no error just means "nothing fetched yet";
/// consumers suppress rendering rather than showing zeros. There is no
/// cross-window caching: changing the window refetches.
#[derive(Clone, Copy)]
pub struct GrowthStore {
    pub data: RwSignal<Option<GrowthSummary>>,
    pub months: RwSignal<u32>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl GrowthStore {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            months: RwSignal::new(6),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn fetch(&self, months: u32) {
        // Window changes refetch, no caching by window size
        let data = self.data;
        let loading = self.loading;
        let error = self.error;
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match commands::get_combined_growth(months).await {
                Ok(growth) => data.set(Some(growth)),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    }
}

impl Default for GrowthStore {
    fn default() -> Self {
        Self::new()
    }
}
