//! Club entity - a named group with one owner and a member list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

/// Club record
///
/// `members` keeps insertion order and never holds duplicates. The owner is
/// not required to appear in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub owner_id: RecordId,
    #[serde(default)]
    pub members: Vec<RecordId>,
    pub created_at: DateTime<Utc>,
}

impl Club {
    /// Create a new Club with no members
    pub fn new(id: RecordId, name: String, description: String, owner_id: RecordId) -> Self {
        Self {
            id,
            name,
            description,
            image_url: None,
            owner_id,
            members: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Replace the member list, dropping duplicates while keeping first occurrences
    pub fn with_members(mut self, members: impl IntoIterator<Item = RecordId>) -> Self {
        self.members.clear();
        for member in members {
            self.add_member(member);
        }
        self
    }

    pub fn with_image(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    #[inline]
    pub fn is_owner(&self, user_id: &RecordId) -> bool {
        &self.owner_id == user_id
    }

    #[inline]
    pub fn is_member(&self, user_id: &RecordId) -> bool {
        self.members.contains(user_id)
    }

    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Append `user_id` unless already present. Returns whether the list changed.
    pub fn add_member(&mut self, user_id: RecordId) -> bool {
        if self.is_member(&user_id) {
            return false;
        }
        self.members.push(user_id);
        true
    }

    /// Remove `user_id` if present. Returns whether the list changed.
    pub fn remove_member(&mut self, user_id: &RecordId) -> bool {
        let before = self.members.len();
        self.members.retain(|id| id != user_id);
        self.members.len() != before
    }
}
