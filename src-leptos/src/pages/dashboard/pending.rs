//! Pending doctor quick-approval section.

use crate::app::AppState;
use amwell_types::DoctorStatus;
use leptos::prelude::*;

#[component]
pub(crate) fn PendingApprovalsSection() -> impl IntoView {
    let doctors = expect_context::<AppState>().doctors;

    let pending = Memo::new(move |_| {
        // Track the list signal, then derive the pending subset
        let _ = doctors.list.items.get();
        doctors.pending()
    });

    view! {
        <section class="card pending-approvals">
            <h2>"Pending approvals"</h2>

            <Show when=move || doctors.list.error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || doctors.list.error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || !pending.get().is_empty()
                fallback=|| view! { <p class="empty">"No doctors waiting for review"</p> }
            >
                <ul class="pending-list">
                    <For
                        each=move || pending.get()
                        key=|doc| doc.id.clone()
                        children=move |doc| {
                            let id = doc.id.clone();
                            let approve_id = id.clone();
                            let reject_id = id.clone();
                            let busy = Memo::new(move |_| {
                                doctors.list.mutating_key.get().as_deref() == Some(id.as_str())
                            });
                            view! {
                                <li class="pending-row">
                                    <div class="pending-row__info">
                                        <span class="pending-row__name">{doc.name.clone()}</span>
                                        <span class="pending-row__spec">
                                            {doc.specialization.display()}
                                        </span>
                                        <span class=format!("badge {}", doc.status.badge_class())>
                                            {doc.status.to_string()}
                                        </span>
                                    </div>
                                    <div class="pending-row__actions">
                                        <button
                                            class="btn btn--primary btn--sm"
                                            disabled=move || busy.get()
                                            on:click=move |_| doctors.update_status(
                                                approve_id.clone(),
                                                DoctorStatus::Approved,
                                            )
                                        >
                                            {move || if busy.get() { "..." } else { "Approve" }}
                                        </button>
                                        <button
                                            class="btn btn--danger btn--sm"
                                            disabled=move || busy.get()
                                            on:click=move |_| doctors.update_status(
                                                reject_id.clone(),
                                                DoctorStatus::Rejected,
                                            )
                                        >
                                            "Reject"
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
