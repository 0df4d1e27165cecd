//! Page header bar with title and logout.

use crate::api::session;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Topbar(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: String,
) -> impl IntoView {
    let navigate = use_navigate();
    let has_subtitle = !subtitle.is_empty();

    let on_logout = move |_| {
        session::clear();
        navigate("/auth/login", Default::default());
    };

    view! {
        <header class="page-header">
            <div class="header-left">
                <h1>{title}</h1>
                <Show when=move || has_subtitle>
                    <p class="subtitle">{subtitle.clone()}</p>
                </Show>
            </div>
            <div class="header-actions">
                <button class="btn btn--ghost" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
