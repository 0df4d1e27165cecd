//! Reusable UI components

mod button;
mod charts;
mod confirm_dialog;
mod partner_form;
mod sidebar;
mod stats_card;
mod topbar;
mod user_modal;

pub use button::Button;
pub use charts::{DoctorStatusChart, GrowthBarChart};
pub use confirm_dialog::ConfirmDialog;
pub use partner_form::PartnerForm;
pub use sidebar::Sidebar;
pub use stats_card::StatsCard;
pub use topbar::Topbar;
pub use user_modal::UserModal;
