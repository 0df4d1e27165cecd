//! Page components

mod advocacy;
mod dashboard;
mod doctors;
mod login;
mod partners;
mod register;
mod users;

pub use advocacy::{Advocacy, AdvocacyAnalytics, ArticleEditor, ArticleStats};
pub use dashboard::Dashboard;
pub use doctors::{DoctorDetail, Doctors};
pub use login::Login;
pub use partners::{PartnerCreate, PartnerDetail, PartnerEdit, Partners};
pub use register::Register;
pub use users::Users;

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/" class="btn btn--primary">"Back to dashboard"</a>
        </div>
    }
}
