//! Doctor detail page with status controls.

use crate::app::AppState;
use crate::components::Topbar;
use crate::formatters::format_date;
use amwell_types::DoctorStatus;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn DoctorDetail() -> impl IntoView {
    let doctors = expect_context::<AppState>().doctors;
    let params = use_params_map();

    // Deep links land here before the list is cached
    if doctors.list.items.get_untracked().is_empty() {
        doctors.fetch_all();
    }

    let doctor_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let doctor = Memo::new(move |_| {
        let id = doctor_id.get();
        doctors.list.items.get().into_iter().find(|doc| doc.id == id)
    });
    let busy = Memo::new(move |_| {
        doctors.list.mutating_key.get().as_deref() == Some(doctor_id.get().as_str())
    });

    let set_status = move |status: DoctorStatus| {
        doctors.update_status(doctor_id.get_untracked(), status);
    };

    view! {
        <div class="page doctor-detail">
            <Topbar title="Doctor profile" />
            <a href="/doctors" class="back-link">"← Back to doctors"</a>

            <Show when=move || doctors.list.error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || doctors.list.error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || doctor.get().is_some()
                fallback=move || {
                    view! {
                        <p class="loading">
                            {move || {
                                if doctors.list.loading.get() {
                                    "Loading doctor..."
                                } else {
                                    "Doctor not found"
                                }
                            }}
                        </p>
                    }
                }
            >
                {move || doctor.get().map(|doc| view! {
                    <div class="card detail-card">
                        <div class="detail-card__header">
                            <h2>{doc.name.clone()}</h2>
                            <span class=format!("badge {}", doc.status.badge_class())>
                                {doc.status.to_string()}
                            </span>
                        </div>

                        <dl class="profile-fields">
                            <dt>"Email"</dt>
                            <dd>{doc.email.clone()}</dd>
                            <dt>"Phone"</dt>
                            <dd>{doc.phone.clone().unwrap_or_else(|| "—".to_string())}</dd>
                            <dt>"Specialization"</dt>
                            <dd>{doc.specialization.display()}</dd>
                            <dt>"Registered"</dt>
                            <dd>
                                {doc.created_at.clone().map(|d| format_date(&d)).unwrap_or_else(|| "—".to_string())}
                            </dd>
                        </dl>

                        <Show when={
                            let has_availability = !doc.availability.is_empty();
                            move || has_availability
                        }>
                            <h3>"Availability"</h3>
                            <ul class="availability">
                                {doc.availability.iter().map(|(day, slots)| view! {
                                    <li>
                                        <strong>{day.clone()}</strong>
                                        ": "
                                        {slots.join(", ")}
                                    </li>
                                }).collect_view()}
                            </ul>
                        </Show>

                        <div class="detail-card__actions">
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=move |_| set_status(DoctorStatus::Approved)
                            >
                                {move || if busy.get() { "Saving..." } else { "Approve" }}
                            </button>
                            <button
                                class="btn btn--secondary"
                                disabled=move || busy.get()
                                on:click=move |_| set_status(DoctorStatus::Reviewing)
                            >
                                "Mark reviewing"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=move |_| set_status(DoctorStatus::Rejected)
                            >
                                "Reject"
                            </button>
                        </div>
                    </div>
                })}
            </Show>
        </div>
    }
}
