//! Response DTOs
//!
//! Views assembled by the services. All implement `Serialize`.

use club_core::entities::TREND_LABELS;
use club_core::{card_actions, Activity, CardAction, Club, DashboardStats, RecordId, User};
use serde::Serialize;

// ============================================================================
// Club Responses
// ============================================================================

/// One entry of the club list with the actions offered to the viewer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubCard {
    pub club: Club,
    pub actions: Vec<CardAction>,
}

impl ClubCard {
    pub fn for_viewer(club: Club, viewer_id: &RecordId) -> Self {
        let actions = card_actions(viewer_id, &club);
        Self { club, actions }
    }
}

/// Manager view of one club
#[derive(Debug, Clone, Serialize)]
pub struct ClubWithMembers {
    pub club: Club,
    /// Member records in member-list order; ids without a record are skipped
    pub members: Vec<User>,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// Everything the dashboard screen renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub activities: Vec<Activity>,
    /// Chart labels for `stats.membership_trend`
    pub labels: [&'static str; 6],
}

impl DashboardSnapshot {
    pub fn new(stats: DashboardStats, activities: Vec<Activity>) -> Self {
        Self {
            stats,
            activities,
            labels: TREND_LABELS,
        }
    }
}
