//! User list store with separately-keyed profile detail state.

use amwell_types::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ListStore;
use crate::api::commands;

#[derive(Clone, Copy, Default)]
pub struct UsersStore {
    pub list: ListStore<User>,
    /// Profile currently open in the detail modal
    pub selected: RwSignal<Option<User>>,
    /// Detail state is independent of the list so the modal spinner
    /// never blocks the grid behind it
    pub detail_loading: RwSignal<bool>,
    pub detail_error: RwSignal<Option<String>>,
}

impl UsersStore {
    pub fn new() -> Self {
        Self {
            list: ListStore::new(),
            selected: RwSignal::new(None),
            detail_loading: RwSignal::new(false),
            detail_error: RwSignal::new(None),
        }
    }

    pub fn fetch_all(&self) {
        let list = self.list;
        list.begin_fetch();
        spawn_local(async move {
            list.finish_fetch(commands::get_all_users().await);
        });
    }

    /// Load one profile for the detail modal.
    pub fn fetch_user(&self, user_id: String) {
        let selected = self.selected;
        let detail_loading = self.detail_loading;
        let detail_error = self.detail_error;
        detail_loading.set(true);
        detail_error.set(None);
        spawn_local(async move {
            match commands::get_user(&user_id).await {
                Ok(user) => selected.set(Some(user)),
                Err(e) => detail_error.set(Some(e.to_string())),
            }
            detail_loading.set(false);
        });
    }

    pub fn close_detail(&self) {
        self.selected.set(None);
        self.detail_error.set(None);
    }
}
