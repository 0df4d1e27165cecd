//! Doctor list store with status mutations.

use amwell_types::{Doctor, DoctorStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ListStore;
use crate::api::commands;

#[derive(Clone, Copy, Default)]
pub struct DoctorsStore {
    pub list: ListStore<Doctor>,
}

impl DoctorsStore {
    pub fn new() -> Self {
        Self { list: ListStore::new() }
    }

    pub fn fetch_all(&self) {
        let list = self.list;
        list.begin_fetch();
        spawn_local(async move {
            list.finish_fetch(commands::get_all_doctors().await);
        });
    }

    /// Fetch just the doctors awaiting review and merge them into the
    /// cache. The dashboard widget uses this lighter endpoint instead of
    /// pulling the full roster.
    pub fn fetch_pending(&self) {
        let list = self.list;
        list.begin_fetch();
        spawn_local(async move {
            match commands::get_pending_doctors().await {
                Ok(pending) => list.apply_upsert_all(pending),
                Err(e) => list.error.set(Some(e.to_string())),
            }
            list.loading.set(false);
        });
    }

    /// Doctors awaiting an approval decision (submitted or reviewing).
    pub fn pending(&self) -> Vec<Doctor> {
        self.list.items.get().into_iter().filter(|doc| doc.status.is_pending()).collect()
    }

    /// Set a doctor's status; the server's updated record replaces the
    /// cached one by id. Failure leaves the cache untouched.
    pub fn update_status(&self, doctor_id: String, status: DoctorStatus) {
        let list = self.list;
        list.mutating_key.set(Some(doctor_id.clone()));
        spawn_local(async move {
            let result = commands::update_doctor_status(&doctor_id, status).await;
            if let Err(e) = &result {
                log::error!("Doctor status update failed: {}", e);
            }
            list.finish_mutation(result);
        });
    }
}
