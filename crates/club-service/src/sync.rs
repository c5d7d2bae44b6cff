//! Live list synchronizer
//!
//! Mirrors a store query into a local list. Every notification carries the
//! whole result set, so the list is replaced wholesale and keeps the order
//! the store delivered it in.

use club_core::{SnapshotEvent, Subscription};
use tracing::{debug, warn};

/// Reported when the store ends a stream without an error event
pub const STREAM_CLOSED: &str = "snapshot stream closed";

/// Lifecycle of a synchronizer
#[derive(Debug)]
pub enum SyncState<T> {
    /// No subscription
    Idle,
    /// Listening. `items` is `None` until the first snapshot arrives.
    Subscribed {
        items: Option<Vec<T>>,
        subscription: Subscription<T>,
    },
    /// The subscription failed and has been released
    Error(String),
}

/// Local copy of a live query
#[derive(Debug)]
pub struct ListSynchronizer<T> {
    state: SyncState<T>,
    load_failed: &'static str,
}

impl<T: Send + 'static> ListSynchronizer<T> {
    /// Create an idle synchronizer. `load_failed` is shown to the user on error.
    pub fn new(load_failed: &'static str) -> Self {
        Self {
            state: SyncState::Idle,
            load_failed,
        }
    }

    /// Start listening on `subscription`, releasing any previous one
    pub fn activate(&mut self, subscription: Subscription<T>) {
        self.release_current();
        self.state = SyncState::Subscribed {
            items: None,
            subscription,
        };
    }

    /// Stop listening. The list is cleared.
    pub fn deactivate(&mut self) {
        self.release_current();
        self.state = SyncState::Idle;
    }

    /// Apply one event. Returns whether the visible state changed.
    ///
    /// Events are ignored unless subscribed.
    pub fn apply(&mut self, event: SnapshotEvent<T>) -> bool {
        let SyncState::Subscribed { items, .. } = &mut self.state else {
            debug!("Dropping snapshot event for inactive synchronizer");
            return false;
        };

        match event {
            SnapshotEvent::Snapshot(snapshot) => {
                *items = Some(snapshot);
                true
            }
            SnapshotEvent::Error(message) => {
                warn!(error = %message, "Live query failed");
                self.fail(message);
                true
            }
        }
    }

    /// Wait for the next event and apply it
    ///
    /// Returns `false` immediately when not subscribed.
    pub async fn next_update(&mut self) -> bool {
        let event = match &mut self.state {
            SyncState::Subscribed { subscription, .. } => subscription.next().await,
            _ => return false,
        };

        match event {
            Some(event) => self.apply(event),
            None => {
                self.fail(STREAM_CLOSED.to_string());
                true
            }
        }
    }

    /// Current list, empty when not subscribed or still loading
    pub fn items(&self) -> &[T] {
        match &self.state {
            SyncState::Subscribed {
                items: Some(items), ..
            } => items.as_slice(),
            _ => &[],
        }
    }

    /// Subscribed but no snapshot yet
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SyncState::Subscribed { items: None, .. })
    }

    pub fn is_subscribed(&self) -> bool {
        matches!(self.state, SyncState::Subscribed { .. })
    }

    /// Raw failure reported by the store
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SyncState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Text to show the user when the query failed
    pub fn user_error(&self) -> Option<&'static str> {
        self.error().map(|_| self.load_failed)
    }

    pub fn state(&self) -> &SyncState<T> {
        &self.state
    }

    fn fail(&mut self, message: String) {
        self.release_current();
        self.state = SyncState::Error(message);
    }

    fn release_current(&mut self) {
        if let SyncState::Subscribed { subscription, .. } =
            std::mem::replace(&mut self.state, SyncState::Idle)
        {
            subscription.release();
        }
    }
}

impl<T: Clone + Send + 'static> ListSynchronizer<T> {
    /// The list reversed. Message queries arrive newest first; chat shows
    /// them oldest first.
    pub fn oldest_first(&self) -> Vec<T> {
        self.items().iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn subscription(
        events: Vec<SnapshotEvent<u32>>,
    ) -> (Subscription<u32>, Arc<AtomicUsize>) {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&released);
        let sub = Subscription::new(stream::iter(events), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (sub, released)
    }

    #[tokio::test]
    async fn test_latest_snapshot_wins() {
        let (sub, _) = subscription(vec![
            SnapshotEvent::Snapshot(vec![1]),
            SnapshotEvent::Snapshot(vec![3, 2]),
        ]);
        let mut sync = ListSynchronizer::new("load failed");
        sync.activate(sub);
        assert!(sync.is_loading());

        assert!(sync.next_update().await);
        assert!(sync.next_update().await);
        assert_eq!(sync.items(), &[3, 2]);
        assert_eq!(sync.oldest_first(), vec![2, 3]);
        assert!(!sync.is_loading());
    }

    #[tokio::test]
    async fn test_error_releases_once() {
        let (sub, released) = subscription(vec![
            SnapshotEvent::Snapshot(vec![1]),
            SnapshotEvent::Error("permission denied".to_string()),
            SnapshotEvent::Snapshot(vec![2]),
        ]);
        let mut sync = ListSynchronizer::new("load failed");
        sync.activate(sub);

        sync.next_update().await;
        sync.next_update().await;
        assert_eq!(sync.error(), Some("permission denied"));
        assert_eq!(sync.user_error(), Some("load failed"));
        assert!(sync.items().is_empty());
        assert_eq!(released.load(Ordering::SeqCst), 1);

        // No more deliveries once failed
        assert!(!sync.next_update().await);
        sync.deactivate();
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_events_ignored_when_idle() {
        let mut sync: ListSynchronizer<u32> = ListSynchronizer::new("load failed");
        assert!(!sync.apply(SnapshotEvent::Snapshot(vec![1])));
        assert!(!sync.next_update().await);
        assert!(sync.items().is_empty());
    }

    #[tokio::test]
    async fn test_deactivate_and_drop_release_once() {
        let (sub, released) = subscription(vec![]);
        let mut sync = ListSynchronizer::new("load failed");
        sync.activate(sub);
        sync.deactivate();
        sync.deactivate();
        assert_eq!(released.load(Ordering::SeqCst), 1);

        let (sub, released) = subscription(vec![]);
        let mut sync = ListSynchronizer::new("load failed");
        sync.activate(sub);
        drop(sync);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_reactivate_releases_previous() {
        let (first, first_released) = subscription(vec![]);
        let (second, second_released) = subscription(vec![SnapshotEvent::Snapshot(vec![7])]);
        let mut sync = ListSynchronizer::new("load failed");
        sync.activate(first);
        sync.activate(second);
        assert_eq!(first_released.load(Ordering::SeqCst), 1);
        assert_eq!(second_released.load(Ordering::SeqCst), 0);

        sync.next_update().await;
        assert_eq!(sync.items(), &[7]);
    }

    #[tokio::test]
    async fn test_stream_end_is_error() {
        let (sub, _) = subscription(vec![]);
        let mut sync = ListSynchronizer::new("load failed");
        sync.activate(sub);
        assert!(sync.next_update().await);
        assert_eq!(sync.error(), Some(STREAM_CLOSED));
    }
}
