//! # club-core
//!
//! Domain layer containing record models, value objects, validation rules,
//! repository and collaborator traits, and snapshot subscriptions.
//! This crate has zero dependencies on a concrete store or identity backend.

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Activity, Club, DashboardStats, Message, User, UserRole};
pub use error::{AuthError, DomainError, UploadError};
pub use events::{SnapshotEvent, Subscription};
pub use traits::{
    ClubRepository, IdentityProvider, ImagePickOptions, ImagePicker, MessageRepository,
    RepoResult, UserRepository,
};
pub use validation::{validate_email, validate_name, validate_password, LengthRules};
pub use value_objects::{
    can_perform, can_perform_named, card_actions, CardAction, ClubAction, ClubPermissions,
    Identity, RecordId,
};
