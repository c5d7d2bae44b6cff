//! Authenticated identity
//!
//! The identity provider owns the session; services receive the current
//! identity as an explicit argument instead of reading ambient state.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// The signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: RecordId,
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<RecordId>, display_name: Option<String>) -> Self {
        Self {
            id: id.into(),
            display_name,
        }
    }

    /// Display name, or `fallback` when the provider has none
    pub fn display_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(fallback)
    }
}
