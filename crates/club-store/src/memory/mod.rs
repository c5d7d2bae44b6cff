//! In-memory document store
//!
//! Holds the `users` and `clubs` collections plus one `messages`
//! sub-collection per club, and pushes full snapshots to listeners after
//! every write. Cloning a `MemoryStore` shares the same documents.

mod faults;
mod listeners;

use async_trait::async_trait;
use club_core::entities::sort_newest_first;
use club_core::{
    Club, ClubRepository, DomainError, Message, MessageRepository, RecordId, RepoResult,
    Subscription, User, UserRepository,
};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, instrument};

pub use faults::FaultPoint;

use faults::Faults;
use listeners::ListenerSet;

struct StoreInner {
    users: DashMap<RecordId, User>,
    /// Clubs in creation order; this is the order every club query returns
    clubs: RwLock<Vec<Club>>,
    /// Messages per club, in insertion order
    messages: DashMap<RecordId, Vec<Message>>,
    club_listeners: ListenerSet<Club>,
    message_listeners: ListenerSet<Message>,
    faults: Faults,
}

/// Shared in-memory document store
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                users: DashMap::new(),
                clubs: RwLock::new(Vec::new()),
                messages: DashMap::new(),
                club_listeners: ListenerSet::new("clubs"),
                message_listeners: ListenerSet::new("messages"),
                faults: Faults::default(),
            }),
        }
    }

    /// Make an operation class fail (or succeed again)
    pub fn set_fault(&self, point: FaultPoint, failing: bool) {
        self.inner.faults.set(point, failing);
    }

    /// Disarm every injected fault
    pub fn clear_faults(&self) {
        self.inner.faults.clear();
    }

    /// Fail every club listener with `message`. Returns how many were failed.
    pub fn fail_club_listeners(&self, message: &str) -> usize {
        self.inner.club_listeners.fail(None, message)
    }

    /// Fail every listener on one club's messages. Returns how many were failed.
    pub fn fail_message_listeners(&self, club_id: &RecordId, message: &str) -> usize {
        self.inner.message_listeners.fail(Some(club_id), message)
    }

    /// Number of attached club listeners
    pub fn club_listener_count(&self) -> usize {
        self.inner.club_listeners.len()
    }

    /// Number of attached message listeners across all clubs
    pub fn message_listener_count(&self) -> usize {
        self.inner.message_listeners.len()
    }

    /// Replace a club's member list wholesale, bypassing membership rules
    ///
    /// Intended for seeding data; services go through `add_member`/`remove_member`.
    pub fn seed_club(&self, club: Club) {
        let mut clubs = self.inner.clubs.write();
        upsert(&mut clubs, club);
        self.inner.club_listeners.broadcast(None, &clubs);
    }

    /// Insert a message as-is, keeping its timestamp. For seeding data.
    pub fn seed_message(&self, club_id: &RecordId, message: Message) {
        let mut entry = self.inner.messages.entry(club_id.clone()).or_default();
        entry.push(message);
        let snapshot = newest_first(&entry);
        self.inner
            .message_listeners
            .broadcast(Some(club_id), &snapshot);
    }

    /// Apply `mutate` to one club and notify listeners if it changed
    fn update_club<F>(&self, club_id: &RecordId, mutate: F) -> RepoResult<()>
    where
        F: FnOnce(&mut Club) -> bool,
    {
        self.inner.faults.check(FaultPoint::Writes)?;

        let mut clubs = self.inner.clubs.write();
        let club = clubs
            .iter_mut()
            .find(|club| &club.id == club_id)
            .ok_or_else(|| DomainError::persistence(format!("No document to update: clubs/{club_id}")))?;

        if mutate(club) {
            self.inner.club_listeners.broadcast(None, &clubs);
        }
        Ok(())
    }
}

fn upsert(clubs: &mut Vec<Club>, club: Club) {
    match clubs.iter_mut().find(|existing| existing.id == club.id) {
        Some(existing) => *existing = club,
        None => clubs.push(club),
    }
}

/// Messages newest first; ties keep the later insertion first
fn newest_first(messages: &[Message]) -> Vec<Message> {
    let mut snapshot: Vec<Message> = messages.iter().rev().cloned().collect();
    sort_newest_first(&mut snapshot);
    snapshot
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<User>> {
        self.inner.faults.check(FaultPoint::Reads)?;
        Ok(self.inner.users.get(id).map(|user| user.clone()))
    }

    async fn find_many(&self, ids: &[RecordId]) -> RepoResult<Vec<User>> {
        self.inner.faults.check(FaultPoint::Reads)?;
        Ok(ids
            .iter()
            .filter_map(|id| self.inner.users.get(id).map(|user| user.clone()))
            .collect())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        self.inner.faults.check(FaultPoint::Writes)?;
        self.inner.users.insert(user.id.clone(), user.clone());
        debug!("User document written");
        Ok(())
    }
}

// ============================================================================
// Club Repository
// ============================================================================

#[async_trait]
impl ClubRepository for MemoryStore {
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Club>> {
        self.inner.faults.check(FaultPoint::Reads)?;
        Ok(self
            .inner
            .clubs
            .read()
            .iter()
            .find(|club| &club.id == id)
            .cloned())
    }

    async fn find_by_owner(&self, owner_id: &RecordId) -> RepoResult<Vec<Club>> {
        self.inner.faults.check(FaultPoint::Reads)?;
        Ok(self
            .inner
            .clubs
            .read()
            .iter()
            .filter(|club| &club.owner_id == owner_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self, club), fields(club_id = %club.id))]
    async fn create(&self, club: &Club) -> RepoResult<()> {
        self.inner.faults.check(FaultPoint::Writes)?;
        let mut clubs = self.inner.clubs.write();
        upsert(&mut clubs, club.clone());
        self.inner.club_listeners.broadcast(None, &clubs);
        debug!("Club document written");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_member(&self, club_id: &RecordId, user_id: &RecordId) -> RepoResult<()> {
        self.update_club(club_id, |club| club.add_member(user_id.clone()))
    }

    #[instrument(skip(self))]
    async fn remove_member(&self, club_id: &RecordId, user_id: &RecordId) -> RepoResult<()> {
        self.update_club(club_id, |club| club.remove_member(user_id))
    }

    async fn subscribe_all(&self) -> RepoResult<Subscription<Club>> {
        self.inner.faults.check(FaultPoint::Subscriptions)?;
        let clubs = self.inner.clubs.read();
        Ok(self.inner.club_listeners.subscribe(None, clubs.clone()))
    }
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
impl MessageRepository for MemoryStore {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, club_id: &RecordId, message: &Message) -> RepoResult<()> {
        self.inner.faults.check(FaultPoint::Writes)?;
        self.seed_message(club_id, message.clone());
        debug!("Message document written");
        Ok(())
    }

    async fn count_by_club(&self, club_id: &RecordId) -> RepoResult<usize> {
        self.inner.faults.check(FaultPoint::Counts)?;
        Ok(self
            .inner
            .messages
            .get(club_id)
            .map_or(0, |messages| messages.len()))
    }

    async fn subscribe_by_club(&self, club_id: &RecordId) -> RepoResult<Subscription<Message>> {
        self.inner.faults.check(FaultPoint::Subscriptions)?;
        // Holding the entry keeps writers out until the listener is registered.
        // A vacant entry is dropped without inserting anything.
        let entry = self.inner.messages.entry(club_id.clone());
        let initial = match &entry {
            Entry::Occupied(occupied) => newest_first(occupied.get()),
            Entry::Vacant(_) => Vec::new(),
        };
        let subscription = self
            .inner
            .message_listeners
            .subscribe(Some(club_id.clone()), initial);
        drop(entry);
        Ok(subscription)
    }
}
