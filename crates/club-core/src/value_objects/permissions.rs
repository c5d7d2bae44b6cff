//! Club permission evaluation
//!
//! A user's rights over a club derive only from two facts: whether they own
//! it and whether they appear in its member list. `ClubPermissions` computes
//! those rights once per (user, club) pair; `can_perform` answers a single
//! action query.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RecordId;
use crate::entities::Club;

bitflags! {
    /// Rights a user holds over one club
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClubPermissions: u8 {
        /// Manage membership and see the manager view (owner only)
        const MANAGE = 1 << 0;
        /// Read and post in the club chat (owner or member)
        const CHAT   = 1 << 1;
        /// Leave the club (member who is not the owner)
        const LEAVE  = 1 << 2;
        /// Join the club (neither owner nor member)
        const JOIN   = 1 << 3;
    }
}

impl ClubPermissions {
    /// Compute the rights `user_id` holds given a club's owner and members
    pub fn compute(user_id: &RecordId, owner_id: &RecordId, members: &[RecordId]) -> Self {
        let is_owner = user_id == owner_id;
        let is_member = members.contains(user_id);

        let mut perms = Self::empty();
        if is_owner {
            perms |= Self::MANAGE;
        }
        if is_owner || is_member {
            perms |= Self::CHAT;
        }
        if is_member && !is_owner {
            perms |= Self::LEAVE;
        }
        if !is_member && !is_owner {
            perms |= Self::JOIN;
        }
        perms
    }

    /// Compute the rights `user_id` holds over `club`
    pub fn for_club(user_id: &RecordId, club: &Club) -> Self {
        Self::compute(user_id, &club.owner_id, &club.members)
    }

    /// Check whether these rights allow `action`
    #[inline]
    pub fn allows(self, action: ClubAction) -> bool {
        self.contains(action.required())
    }
}

/// Actions that are gated by club permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubAction {
    Manage,
    Chat,
    Leave,
}

impl ClubAction {
    /// Permission flag required for this action
    pub fn required(self) -> ClubPermissions {
        match self {
            Self::Manage => ClubPermissions::MANAGE,
            Self::Chat => ClubPermissions::CHAT,
            Self::Leave => ClubPermissions::LEAVE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manage => "manage",
            Self::Chat => "chat",
            Self::Leave => "leave",
        }
    }
}

impl fmt::Display for ClubAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for action names outside {manage, chat, leave}
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown club action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for ClubAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manage" => Ok(Self::Manage),
            "chat" => Ok(Self::Chat),
            "leave" => Ok(Self::Leave),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// Check whether `user_id` may perform `action` on a club
pub fn can_perform(
    user_id: &RecordId,
    owner_id: &RecordId,
    members: &[RecordId],
    action: ClubAction,
) -> bool {
    ClubPermissions::compute(user_id, owner_id, members).allows(action)
}

/// Same as [`can_perform`] for an action given by name; unknown names are denied
pub fn can_perform_named(
    user_id: &RecordId,
    owner_id: &RecordId,
    members: &[RecordId],
    action: &str,
) -> bool {
    action
        .parse::<ClubAction>()
        .is_ok_and(|action| can_perform(user_id, owner_id, members, action))
}

/// Buttons offered on a club card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardAction {
    Manage,
    Chat,
    Leave,
    Join,
}

/// Ordered actions offered to `user_id` for `club`
///
/// Owners get manage + chat, members get leave + chat, everyone else gets join.
pub fn card_actions(user_id: &RecordId, club: &Club) -> Vec<CardAction> {
    let perms = ClubPermissions::for_club(user_id, club);
    if perms.contains(ClubPermissions::MANAGE) {
        vec![CardAction::Manage, CardAction::Chat]
    } else if perms.contains(ClubPermissions::LEAVE) {
        vec![CardAction::Leave, CardAction::Chat]
    } else {
        vec![CardAction::Join]
    }
}
