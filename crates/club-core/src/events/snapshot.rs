//! Snapshot subscriptions
//!
//! The store pushes the full current result of a query every time it changes.
//! A `Subscription` is the consumer's end of that feed. Dropping it, or
//! calling [`Subscription::release`], detaches the listener from the store;
//! the release hook runs exactly once.

use futures::stream::BoxStream;
use futures::StreamExt;
use std::fmt;

/// One notification from a snapshot listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotEvent<T> {
    /// Complete, ordered result of the query at this instant
    Snapshot(Vec<T>),
    /// The listener failed and will deliver nothing further
    Error(String),
}

impl<T> SnapshotEvent<T> {
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

type ReleaseHook = Box<dyn FnOnce() + Send + 'static>;

/// Live feed of snapshots for one query
pub struct Subscription<T> {
    events: BoxStream<'static, SnapshotEvent<T>>,
    release: Option<ReleaseHook>,
}

impl<T: Send + 'static> Subscription<T> {
    /// Build a subscription from an event stream and the hook that detaches it
    pub fn new<S, F>(events: S, release: F) -> Self
    where
        S: futures::Stream<Item = SnapshotEvent<T>> + Send + 'static,
        F: FnOnce() + Send + 'static,
    {
        Self {
            events: events.boxed(),
            release: Some(Box::new(release)),
        }
    }

    /// Wait for the next notification. `None` once the feed has ended.
    pub async fn next(&mut self) -> Option<SnapshotEvent<T>> {
        self.events.next().await
    }

    /// Detach from the store. Consumes the subscription so it cannot be released twice.
    pub fn release(self) {
        drop(self);
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish_non_exhaustive()
    }
}
