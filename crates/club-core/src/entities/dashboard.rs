//! Derived dashboard records. Never stored.

use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

/// Labels drawn under the membership trend chart
pub const TREND_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Timestamp shown on every synthetic activity entry
pub const ACTIVITY_TIMESTAMP: &str = "Today";

/// Summary statistics over the clubs a user owns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_members: usize,
    pub total_messages: usize,
    pub total_clubs: usize,
    /// Member count of each owned club, in fetch order. A cross-sectional
    /// snapshot, not a history.
    pub membership_trend: Vec<usize>,
}

/// Recent-activity line shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    pub description: String,
    pub timestamp: String,
}

impl Activity {
    /// Synthetic entry summarising one club's size
    pub fn club_summary(club_id: RecordId, club_name: &str, member_count: usize) -> Self {
        Self {
            id: club_id,
            description: format!("{club_name} - {member_count} members"),
            timestamp: ACTIVITY_TIMESTAMP.to_string(),
        }
    }
}
