//! # Amwell Types
//!
//! Domain models, errors and client-cache logic for the Plan Am Well
//! admin dashboard.
//!
//! This crate provides the foundational type system for the front-end:
//!
//! - **`error`** - Typed API error hierarchy (auth, forbidden, transport)
//! - **`models`** - Domain records mirrored from backend JSON
//!   (Doctor, User, Partner, Article, GrowthSummary)
//! - **`envelope`** - The `{ success, data }` response wrapper, tolerant
//!   of bare payloads
//! - **`session`** - Token pair model and the 401 refresh decision table
//! - **`cache`** - List reconciliation applied after mutations
//!
//! ## Architecture Role
//!
//! `amwell-types` sits at the bottom of the dependency graph and carries
//! no WASM dependencies, so everything here is unit-tested on the host.
//!
//! All types are designed to be:
//! - **Serializable** via serde for the REST API
//! - **Clone** for cheap sharing across reactive signals
//! - **PartialEq** for testing and comparison

pub mod cache;
pub mod envelope;
pub mod error;
pub mod models;
pub mod session;

// Re-export error and envelope types for convenience
pub use envelope::{ApiPayload, Envelope};
pub use error::ApiError;
pub use session::{AuthTokens, RefreshDecision};

// Re-export core model types
pub use models::{
    Article, ArticleAnalytics, ArticleStatus, DashboardStats, Doctor, DoctorStatus, GrowthSummary,
    Partner, PartnerType, User, WeeklyPoint,
};
