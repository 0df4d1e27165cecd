//! Partner store: list cache, detail fetch, CRUD and status toggle.

use amwell_types::Partner;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use super::ListStore;
use crate::api::commands::{self, PartnerStats};

#[derive(Clone, Copy, Default)]
pub struct PartnersStore {
    pub list: ListStore<Partner>,
    pub stats: RwSignal<Option<PartnerStats>>,
}

impl PartnersStore {
    pub fn new() -> Self {
        Self { list: ListStore::new(), stats: RwSignal::new(None) }
    }

    pub fn fetch_all(&self) {
        let list = self.list;
        list.begin_fetch();
        spawn_local(async move {
            list.finish_fetch(commands::get_all_partners().await);
        });
    }

    pub fn fetch_stats(&self) {
        let stats = self.stats;
        spawn_local(async move {
            match commands::get_partner_stats().await {
                Ok(value) => stats.set(Some(value)),
                Err(e) => log::warn!("Partner stats fetch failed: {}", e),
            }
        });
    }

    /// Load one partner for the detail or edit view. Records the error
    /// in the store and returns `None` on failure.
    pub async fn fetch_by_id(&self, partner_id: &str) -> Option<Partner> {
        match commands::get_partner(partner_id).await {
            Ok(partner) => Some(partner),
            Err(e) => {
                self.list.error.set(Some(e.to_string()));
                None
            }
        }
    }

    /// Create a partner; the server's canonical record is appended to
    /// the cache. Returns `Err` so the form can show inline feedback.
    pub async fn create(&self, form: FormData) -> Result<Partner, String> {
        match commands::create_partner(form).await {
            Ok(partner) => {
                self.list.apply_append(partner.clone());
                Ok(partner)
            }
            Err(e) => {
                let message = e.to_string();
                self.list.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    /// Update a partner; the returned record replaces the cached one
    /// wholesale.
    pub async fn update(&self, partner_id: &str, form: FormData) -> Result<Partner, String> {
        match commands::update_partner(partner_id, form).await {
            Ok(partner) => {
                self.list.apply_replace(partner.clone());
                Ok(partner)
            }
            Err(e) => {
                let message = e.to_string();
                self.list.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    /// Delete a partner. Returns whether it succeeded; the cache only
    /// shrinks on success.
    pub async fn remove(&self, partner_id: &str) -> bool {
        match commands::delete_partner(partner_id).await {
            Ok(()) => {
                self.list.apply_remove(partner_id);
                true
            }
            Err(e) => {
                self.list.error.set(Some(e.to_string()));
                false
            }
        }
    }

    /// Flip active/inactive with a row-scoped busy marker.
    pub fn toggle_status(&self, partner_id: String) {
        let list = self.list;
        list.mutating_key.set(Some(partner_id.clone()));
        spawn_local(async move {
            let result = commands::toggle_partner_status(&partner_id).await;
            if let Err(e) = &result {
                log::error!("Partner status toggle failed: {}", e);
            }
            list.finish_mutation(result);
        });
    }
}
