//! Partner detail page with status toggle and delete.

use crate::app::AppState;
use crate::components::{ConfirmDialog, Topbar};
use crate::formatters::format_date;
use amwell_types::Partner;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn PartnerDetail() -> impl IntoView {
    let partners = expect_context::<AppState>().partners;
    let params = use_params_map();
    let navigate = use_navigate();

    let partner_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let partner = RwSignal::new(Option::<Partner>::None);
    let load_error = RwSignal::new(Option::<String>::None);
    let delete_confirm = RwSignal::new(false);
    let deleted = RwSignal::new(false);

    Effect::new(move |_| {
        let id = partner_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match partners.fetch_by_id(&id).await {
                Some(found) => partner.set(Some(found)),
                None => load_error.set(Some("Could not load this partner".to_string())),
            }
        });
    });

    // The toggle rewrites the cached list entry; mirror it here
    Effect::new(move |_| {
        let id = partner_id.get();
        if let Some(updated) = partners.list.items.get().into_iter().find(|p| p.id == id) {
            partner.set(Some(updated));
        }
    });

    Effect::new(move |_| {
        if deleted.get() {
            navigate("/partners", Default::default());
        }
    });

    let busy = Memo::new(move |_| {
        partners.list.mutating_key.get().as_deref() == Some(partner_id.get().as_str())
    });

    let on_toggle = move |_| {
        partners.toggle_status(partner_id.get_untracked());
    };

    let on_delete = Callback::new(move |()| {
        delete_confirm.set(false);
        let id = partner_id.get_untracked();
        spawn_local(async move {
            if partners.remove(&id).await {
                deleted.set(true);
            }
        });
    });

    view! {
        <div class="page partner-detail">
            <Topbar title="Partner" />
            <a href="/partners" class="back-link">"← Back to partners"</a>

            <Show when=move || load_error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || load_error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || partner.get().is_some()
                fallback=|| view! { <p class="loading">"Loading partner..."</p> }
            >
                {move || partner.get().map(|p| {
                    let edit_href = format!("/partners/{}/edit", p.id);
                    let image = p.display_image().map(str::to_owned);
                    let website = p.display_website().map(str::to_owned);
                    let is_active = p.is_active;
                    view! {
                        <div class="card detail-card">
                            <div class="detail-card__header">
                                {image.map(|url| view! {
                                    <img class="partner-detail__image" src=url alt=p.name.clone() />
                                })}
                                <h2>{p.name.clone()}</h2>
                                <span class="partner-card__type">{p.partner_type.label()}</span>
                                <span class=format!(
                                    "badge {}",
                                    if is_active { "badge--success" } else { "badge--neutral" },
                                )>
                                    {p.status_label()}
                                </span>
                            </div>

                            <dl class="profile-fields">
                                <dt>"Email"</dt>
                                <dd>{p.email.clone().unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Phone"</dt>
                                <dd>{p.phone.clone().unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Website"</dt>
                                <dd>
                                    {match website {
                                        Some(url) => view! {
                                            <a href=url.clone() target="_blank">{url.clone()}</a>
                                        }.into_any(),
                                        None => view! { <span>"—"</span> }.into_any(),
                                    }}
                                </dd>
                                <dt>"Profession"</dt>
                                <dd>{p.profession.clone().unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Address"</dt>
                                <dd>{p.business_address.clone().unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Description"</dt>
                                <dd>{p.description.clone().unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Added"</dt>
                                <dd>
                                    {p.created_at.clone().map(|d| format_date(&d)).unwrap_or_else(|| "—".to_string())}
                                </dd>
                            </dl>

                            <div class="detail-card__actions">
                                <button
                                    class="btn btn--secondary"
                                    disabled=move || busy.get()
                                    on:click=on_toggle
                                >
                                    {move || {
                                        if busy.get() {
                                            "Saving...".to_string()
                                        } else if is_active {
                                            "Deactivate".to_string()
                                        } else {
                                            "Activate".to_string()
                                        }
                                    }}
                                </button>
                                <a class="btn btn--primary" href=edit_href>"Edit"</a>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| delete_confirm.set(true)
                                >
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    }
                })}
            </Show>

            <ConfirmDialog
                is_open=Signal::derive(move || delete_confirm.get())
                title="Delete partner"
                message="This removes the partner permanently. Continue?"
                on_confirm=on_delete
                on_cancel=Callback::new(move |()| delete_confirm.set(false))
            />
        </div>
    }
}
