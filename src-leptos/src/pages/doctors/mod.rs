//! Doctors page: card grid with status badges.

mod detail;

pub use detail::DoctorDetail;

use crate::app::AppState;
use crate::components::Topbar;
use leptos::prelude::*;

#[component]
pub fn Doctors() -> impl IntoView {
    let doctors = expect_context::<AppState>().doctors;

    doctors.fetch_all();

    let pending_count = Memo::new(move |_| {
        doctors.list.items.get().iter().filter(|doc| doc.status.is_pending()).count()
    });

    view! {
        <div class="page doctors">
            <Topbar title="Doctors" subtitle="Doctor profiles and approvals" />

            <Show when=move || doctors.list.error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || doctors.list.error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || doctors.list.loading.get() && doctors.list.items.get().is_empty()>
                <p class="loading">"Loading doctors..."</p>
            </Show>

            <p class="list-count">
                {move || {
                    format!(
                        "{} doctors, {} pending review",
                        doctors.list.items.get().len(),
                        pending_count.get(),
                    )
                }}
            </p>

            <div class="card-grid">
                <For
                    each=move || doctors.list.items.get()
                    key=|doc| doc.id.clone()
                    children=move |doc| {
                        let href = format!("/doctors/{}", doc.id);
                        view! {
                            <a class="card doctor-card" href=href>
                                <div class="doctor-card__header">
                                    <h3>{doc.name.clone()}</h3>
                                    <span class=format!("badge {}", doc.status.badge_class())>
                                        {doc.status.to_string()}
                                    </span>
                                </div>
                                <p class="doctor-card__spec">{doc.specialization.display()}</p>
                                <p class="doctor-card__email">{doc.email.clone()}</p>
                            </a>
                        }
                    }
                />
            </div>

            <Show when=move || !doctors.list.loading.get() && doctors.list.items.get().is_empty()>
                <p class="empty">"No doctors yet"</p>
            </Show>
        </div>
    }
}
