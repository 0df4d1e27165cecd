//! Partners pages: list, create, detail, edit.

mod create;
mod detail;
mod edit;

pub use create::PartnerCreate;
pub use detail::PartnerDetail;
pub use edit::PartnerEdit;

use crate::app::AppState;
use crate::components::Topbar;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Partners() -> impl IntoView {
    let partners = expect_context::<AppState>().partners;
    let navigate = use_navigate();

    partners.fetch_all();
    partners.fetch_stats();

    let on_create = move |_| navigate("/partners/create", Default::default());

    view! {
        <div class="page partners">
            <Topbar title="Partners" subtitle="Partner organizations and individuals" />

            <div class="toolbar">
                {move || partners.stats.get().map(|stats| view! {
                    <span class="list-count">
                        {format!(
                            "{} partners · {} active · {} inactive",
                            stats.total, stats.active, stats.inactive,
                        )}
                    </span>
                })}
                <button class="btn btn--primary" on:click=on_create>
                    "+ Add partner"
                </button>
            </div>

            <Show when=move || partners.list.error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || partners.list.error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || partners.list.loading.get() && partners.list.items.get().is_empty()>
                <p class="loading">"Loading partners..."</p>
            </Show>

            <div class="card-grid">
                <For
                    each=move || partners.list.items.get()
                    key=|partner| partner.id.clone()
                    children=move |partner| {
                        let href = format!("/partners/{}", partner.id);
                        let image = partner.display_image().map(str::to_owned);
                        view! {
                            <a class="card partner-card" href=href>
                                {match image {
                                    Some(url) => view! {
                                        <img class="partner-card__image" src=url alt=partner.name.clone() />
                                    }.into_any(),
                                    None => view! {
                                        <div class="partner-card__placeholder">"🤝"</div>
                                    }.into_any(),
                                }}
                                <div class="partner-card__body">
                                    <h3>{partner.name.clone()}</h3>
                                    <span class="partner-card__type">
                                        {partner.partner_type.label()}
                                    </span>
                                    <span class=format!(
                                        "badge {}",
                                        if partner.is_active { "badge--success" } else { "badge--neutral" },
                                    )>
                                        {partner.status_label()}
                                    </span>
                                </div>
                            </a>
                        }
                    }
                />
            </div>

            <Show when=move || !partners.list.loading.get() && partners.list.items.get().is_empty()>
                <div class="empty empty--action">
                    <p>"No partners yet"</p>
                </div>
            </Show>
        </div>
    }
}
