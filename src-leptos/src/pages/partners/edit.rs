//! Partner edit page.

use crate::app::AppState;
use crate::components::{PartnerForm, Topbar};
use amwell_types::Partner;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use web_sys::FormData;

#[component]
pub fn PartnerEdit() -> impl IntoView {
    let partners = expect_context::<AppState>().partners;
    let params = use_params_map();
    let navigate = use_navigate();

    let partner_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let initial = RwSignal::new(Option::<Partner>::None);
    let load_error = RwSignal::new(Option::<String>::None);

    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let saved = RwSignal::new(false);

    // Always load the canonical record; the cached list copy may be
    // display-flattened or stale
    Effect::new(move |_| {
        let id = partner_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match partners.fetch_by_id(&id).await {
                Some(partner) => initial.set(Some(partner)),
                None => load_error.set(Some("Could not load this partner".to_string())),
            }
        });
    });

    Effect::new(move |_| {
        if saved.get() {
            navigate("/partners", Default::default());
        }
    });

    let on_submit = Callback::new(move |form: FormData| {
        saving.set(true);
        error.set(None);
        let id = partner_id.get_untracked();
        spawn_local(async move {
            match partners.update(&id, form).await {
                Ok(_) => saved.set(true),
                Err(message) => {
                    error.set(Some(message));
                    saving.set(false);
                }
            }
        });
    });

    view! {
        <div class="page partner-edit">
            <Topbar title="Edit partner" />
            <a href="/partners" class="back-link">"← Back to partners"</a>

            <Show when=move || load_error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || load_error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || initial.get().is_some()
                fallback=|| view! { <p class="loading">"Loading partner..."</p> }
            >
                {move || initial.get().map(|partner| view! {
                    <div class="card">
                        <PartnerForm
                            initial=partner
                            saving=Signal::derive(move || saving.get())
                            error=Signal::derive(move || error.get())
                            submit_label="Save changes"
                            on_submit=on_submit
                        />
                    </div>
                })}
            </Show>
        </div>
    }
}
