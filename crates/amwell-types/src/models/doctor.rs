//! Doctor model and approval status.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cache::Keyed;

/// Approval state of a doctor profile.
///
/// The front-end performs no transition validation: any status can be set
/// from any state, and unrecognized wire values collapse to [`Unknown`]
/// rather than failing the whole list fetch.
///
/// [`Unknown`]: DoctorStatus::Unknown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    #[default]
    Submitted,
    Reviewing,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl DoctorStatus {
    /// Wire value sent to the status-update endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorStatus::Submitted => "submitted",
            DoctorStatus::Reviewing => "reviewing",
            DoctorStatus::Approved => "approved",
            DoctorStatus::Rejected => "rejected",
            DoctorStatus::Unknown => "unknown",
        }
    }

    /// Whether this doctor is awaiting an approval decision.
    pub fn is_pending(&self) -> bool {
        matches!(self, DoctorStatus::Submitted | DoctorStatus::Reviewing)
    }

    /// CSS modifier used for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            DoctorStatus::Approved => "badge--success",
            DoctorStatus::Submitted | DoctorStatus::Reviewing => "badge--warning",
            DoctorStatus::Rejected => "badge--danger",
            DoctorStatus::Unknown => "badge--neutral",
        }
    }
}

impl std::fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specialization as the backend sends it: a single string in older
/// records, a list in newer ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Specialization {
    One(String),
    Many(Vec<String>),
}

impl Specialization {
    /// Flattened, comma-separated form for display.
    pub fn display(&self) -> String {
        match self {
            Specialization::One(value) => value.clone(),
            Specialization::Many(values) => values.join(", "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Specialization::One(value) => value.is_empty(),
            Specialization::Many(values) => values.is_empty(),
        }
    }
}

impl Default for Specialization {
    fn default() -> Self {
        Specialization::Many(Vec::new())
    }
}

/// A doctor profile as returned by `/admin/doctors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: DoctorStatus,
    #[serde(default)]
    pub specialization: Specialization,
    /// Weekday label to available time slots
    #[serde(default)]
    pub availability: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Keyed for Doctor {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_specialization_accepts_string_or_list() {
        let doc: Doctor = serde_json::from_str(
            r#"{ "_id": "d1", "name": "Dr A", "specialization": "Gynecology" }"#,
        )
        .unwrap();
        assert_eq!(doc.specialization.display(), "Gynecology");

        let doc: Doctor = serde_json::from_str(
            r#"{ "_id": "d2", "name": "Dr B", "specialization": ["Obstetrics", "Fertility"] }"#,
        )
        .unwrap();
        assert_eq!(doc.specialization.display(), "Obstetrics, Fertility");
    }

    #[test]
    fn test_unknown_status_does_not_fail_the_fetch() {
        let doc: Doctor =
            serde_json::from_str(r#"{ "_id": "d3", "status": "archived" }"#).unwrap();
        assert_eq!(doc.status, DoctorStatus::Unknown);
        assert!(!doc.status.is_pending());
    }

    #[test]
    fn test_pending_statuses() {
        assert!(DoctorStatus::Submitted.is_pending());
        assert!(DoctorStatus::Reviewing.is_pending());
        assert!(!DoctorStatus::Approved.is_pending());
        assert!(!DoctorStatus::Rejected.is_pending());
    }

    #[test]
    fn test_status_round_trip() {
        let json = serde_json::to_string(&DoctorStatus::Reviewing).unwrap();
        assert_eq!(json, r#""reviewing""#);
        let back: DoctorStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DoctorStatus::Reviewing);
    }
}
