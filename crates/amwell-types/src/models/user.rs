//! User model.

use serde::{Deserialize, Serialize};

use crate::cache::Keyed;

/// A platform user as returned by `/admin/users`.
///
/// Read-only from this front-end: there is no user edit or delete
/// surface, only the list and the profile detail view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}
