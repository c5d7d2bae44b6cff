//! Message entity - a chat message inside one club

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Message record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: RecordId,
    pub text: String,
    pub user_id: RecordId,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new Message, trimming `text`
    ///
    /// # Errors
    /// Returns `DomainError::EmptyMessage` if nothing is left after trimming
    pub fn new(
        id: RecordId,
        text: &str,
        user_id: RecordId,
        user_name: String,
    ) -> Result<Self, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        Ok(Self {
            id,
            text: text.to_string(),
            user_id,
            user_name,
            created_at: Utc::now(),
        })
    }
}

/// Sort messages newest first, the order the store delivers them in
pub fn sort_newest_first(messages: &mut [Message]) {
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
