//! Core domain models for the Plan Am Well admin dashboard.
//!
//! These are plain records mirrored from backend JSON responses; the
//! front-end does not enforce invariants beyond optional-field defaults.

mod article;
mod doctor;
mod growth;
mod partner;
mod user;

// Re-export all models
pub use article::{
    Article, ArticleAnalytics, ArticleAuthor, ArticleStatus, FeaturedImage, ReferrerCount,
};
pub use doctor::{Doctor, DoctorStatus, Specialization};
pub use growth::{DashboardStats, GrowthSummary, WeeklyPoint};
pub use partner::{Partner, PartnerImage, PartnerType};
pub use user::User;
