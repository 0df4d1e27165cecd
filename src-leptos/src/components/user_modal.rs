//! User profile detail modal.

use crate::app::AppState;
use crate::formatters::format_date;
use leptos::prelude::*;

/// Profile modal backed by the users store's detail state. Opens while
/// a detail fetch is in flight or a profile is loaded; the spinner here
/// never blocks the grid behind it.
#[component]
pub fn UserModal() -> impl IntoView {
    let users = expect_context::<AppState>().users;

    let is_open = Memo::new(move |_| {
        users.detail_loading.get() || users.selected.get().is_some() || users.detail_error.get().is_some()
    });

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| users.close_detail()>
                <div class="modal modal--profile" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">"User Profile"</h3>
                        <button class="modal-close" on:click=move |_| users.close_detail()>
                            "×"
                        </button>
                    </div>

                    <div class="modal-body">
                        <Show when=move || users.detail_loading.get()>
                            <p class="loading">"Loading profile..."</p>
                        </Show>

                        <Show when=move || users.detail_error.get().is_some()>
                            <div class="alert alert--error">
                                <span>{move || users.detail_error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        {move || users.selected.get().map(|user| view! {
                            <dl class="profile-fields">
                                <dt>"Name"</dt>
                                <dd>{user.name.clone()}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email.clone().unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Phone"</dt>
                                <dd>{user.phone.clone().unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Gender"</dt>
                                <dd>{user.gender.clone().unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Date of birth"</dt>
                                <dd>{user.date_of_birth.clone().map(|d| format_date(&d)).unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Address"</dt>
                                <dd>{user.address.clone().unwrap_or_else(|| "—".to_string())}</dd>
                                <dt>"Joined"</dt>
                                <dd>{user.created_at.clone().map(|d| format_date(&d)).unwrap_or_else(|| "—".to_string())}</dd>
                            </dl>
                        })}
                    </div>
                </div>
            </div>
        </Show>
    }
}
