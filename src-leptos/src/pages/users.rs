//! Users page: card grid with profile detail modal.

use crate::app::AppState;
use crate::components::{Topbar, UserModal};
use crate::formatters::format_date;
use leptos::prelude::*;

#[component]
pub fn Users() -> impl IntoView {
    let users = expect_context::<AppState>().users;

    users.fetch_all();

    let count = Memo::new(move |_| users.list.items.get().len());

    view! {
        <div class="page users">
            <Topbar title="Users" subtitle="Registered platform users" />

            <Show when=move || users.list.error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || users.list.error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || users.list.loading.get() && users.list.items.get().is_empty()>
                <p class="loading">"Loading users..."</p>
            </Show>

            <p class="list-count">{move || format!("{} users", count.get())}</p>

            <div class="card-grid">
                <For
                    each=move || users.list.items.get()
                    key=|user| user.id.clone()
                    children=move |user| {
                        let id = user.id.clone();
                        view! {
                            <div
                                class="card user-card"
                                on:click=move |_| users.fetch_user(id.clone())
                            >
                                <div class="user-card__avatar">"👤"</div>
                                <div class="user-card__body">
                                    <h3>{user.name.clone()}</h3>
                                    <p class="user-card__email">
                                        {user.email.clone().unwrap_or_else(|| "—".to_string())}
                                    </p>
                                    <p class="user-card__joined">
                                        {"Joined "}
                                        {user
                                            .created_at
                                            .clone()
                                            .map(|d| format_date(&d))
                                            .unwrap_or_else(|| "—".to_string())}
                                    </p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || !users.list.loading.get() && users.list.items.get().is_empty()>
                <p class="empty">"No users yet"</p>
            </Show>

            <UserModal />
        </div>
    }
}
