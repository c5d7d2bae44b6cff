//! Value objects - immutable types that represent domain concepts

mod identity;
mod permissions;
mod record_id;

pub use identity::Identity;
pub use permissions::{
    can_perform, can_perform_named, card_actions, CardAction, ClubAction, ClubPermissions,
    UnknownAction,
};
pub use record_id::{RecordId, AUTO_ID_LEN};
