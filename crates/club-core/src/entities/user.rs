//! User entity - a registered account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::RecordId;

/// Account role chosen at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular user: joins clubs and chats
    #[default]
    User,
    /// Club account: may also create and own clubs
    Club,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Club => "club",
        }
    }

    /// Only club accounts may create clubs
    #[inline]
    pub fn can_create_clubs(self) -> bool {
        matches!(self, Self::Club)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "club" => Ok(Self::Club),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: RecordId, full_name: String, email: String, role: UserRole) -> Self {
        Self {
            id,
            full_name,
            email,
            role,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_club_account(&self) -> bool {
        self.role.can_create_clubs()
    }
}
