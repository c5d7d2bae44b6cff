//! Repository traits (ports) - define the interface for document access
//!
//! Each record type maps to one document; messages live in a per-club
//! sub-collection. The domain layer defines what it needs, and the store
//! adapter provides the implementation.

use async_trait::async_trait;

use crate::entities::{Club, Message, User};
use crate::error::DomainError;
use crate::events::Subscription;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<User>>;

    /// Find every user whose id is in `ids`; unknown ids are skipped
    async fn find_many(&self, ids: &[RecordId]) -> RepoResult<Vec<User>>;

    /// Write a user document under its id
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Club Repository
// ============================================================================

#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Find club by ID
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Club>>;

    /// All clubs whose owner is `owner_id`, in store order
    async fn find_by_owner(&self, owner_id: &RecordId) -> RepoResult<Vec<Club>>;

    /// Write a club document under its id
    async fn create(&self, club: &Club) -> RepoResult<()>;

    /// Union `user_id` into the member list; no-op if already present
    async fn add_member(&self, club_id: &RecordId, user_id: &RecordId) -> RepoResult<()>;

    /// Remove `user_id` from the member list; no-op if absent
    async fn remove_member(&self, club_id: &RecordId, user_id: &RecordId) -> RepoResult<()>;

    /// Listen to every club, in store order
    async fn subscribe_all(&self) -> RepoResult<Subscription<Club>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Add a message to a club's sub-collection
    async fn create(&self, club_id: &RecordId, message: &Message) -> RepoResult<()>;

    /// Number of messages in a club's sub-collection
    async fn count_by_club(&self, club_id: &RecordId) -> RepoResult<usize>;

    /// Listen to a club's messages, newest first
    async fn subscribe_by_club(&self, club_id: &RecordId) -> RepoResult<Subscription<Message>>;
}
