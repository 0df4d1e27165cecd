//! Partner create page.

use crate::app::AppState;
use crate::components::{PartnerForm, Topbar};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::FormData;

#[component]
pub fn PartnerCreate() -> impl IntoView {
    let partners = expect_context::<AppState>().partners;
    let navigate = use_navigate();

    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let created = RwSignal::new(false);

    Effect::new(move |_| {
        if created.get() {
            navigate("/partners", Default::default());
        }
    });

    let on_submit = Callback::new(move |form: FormData| {
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match partners.create(form).await {
                Ok(partner) => {
                    log::info!("Partner created: {}", partner.name);
                    created.set(true);
                }
                Err(message) => {
                    error.set(Some(message));
                    saving.set(false);
                }
            }
        });
    });

    view! {
        <div class="page partner-create">
            <Topbar title="Add partner" />
            <a href="/partners" class="back-link">"← Back to partners"</a>

            <div class="card">
                <PartnerForm
                    saving=Signal::derive(move || saving.get())
                    error=Signal::derive(move || error.get())
                    submit_label="Create partner"
                    on_submit=on_submit
                />
            </div>
        </div>
    }
}
