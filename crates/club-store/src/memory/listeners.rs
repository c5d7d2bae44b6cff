//! Snapshot listener registry
//!
//! Keeps one unbounded channel per live subscription. Writers call
//! [`ListenerSet::broadcast`] while still holding the lock on the collection
//! they changed, so every listener sees snapshots in write order.

use club_core::{RecordId, SnapshotEvent, Subscription};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

struct Listener<T> {
    /// Sub-collection the listener watches (`None` for top-level collections)
    scope: Option<RecordId>,
    tx: mpsc::UnboundedSender<SnapshotEvent<T>>,
}

/// Registry of live listeners for one collection
pub(crate) struct ListenerSet<T> {
    collection: &'static str,
    next_id: AtomicU64,
    listeners: Arc<DashMap<u64, Listener<T>>>,
}

impl<T: Clone + Send + Sync + 'static> ListenerSet<T> {
    pub(crate) fn new(collection: &'static str) -> Self {
        Self {
            collection,
            next_id: AtomicU64::new(1),
            listeners: Arc::new(DashMap::new()),
        }
    }

    /// Register a listener and deliver `initial` as its first snapshot
    pub(crate) fn subscribe(&self, scope: Option<RecordId>, initial: Vec<T>) -> Subscription<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, mut rx) = mpsc::unbounded_channel();

        // Receiver is alive, so this cannot fail
        let _ = tx.send(SnapshotEvent::Snapshot(initial));
        self.listeners.insert(id, Listener { scope, tx });

        tracing::debug!(collection = self.collection, listener_id = id, "Listener attached");

        let listeners = Arc::clone(&self.listeners);
        let collection = self.collection;
        Subscription::new(
            futures::stream::poll_fn(move |cx| rx.poll_recv(cx)),
            move || {
                if listeners.remove(&id).is_some() {
                    tracing::debug!(collection, listener_id = id, "Listener released");
                }
            },
        )
    }

    /// Push a snapshot to every listener on `scope`
    pub(crate) fn broadcast(&self, scope: Option<&RecordId>, snapshot: &[T]) {
        let mut closed = Vec::new();
        for entry in self.listeners.iter() {
            if entry.scope.as_ref() != scope {
                continue;
            }
            if entry
                .tx
                .send(SnapshotEvent::Snapshot(snapshot.to_vec()))
                .is_err()
            {
                closed.push(*entry.key());
            }
        }
        for id in closed {
            self.listeners.remove(&id);
        }
    }

    /// Deliver an error to every listener on `scope` and detach them
    pub(crate) fn fail(&self, scope: Option<&RecordId>, message: &str) -> usize {
        let failed: Vec<u64> = self
            .listeners
            .iter()
            .filter(|entry| entry.scope.as_ref() == scope)
            .map(|entry| *entry.key())
            .collect();

        for id in &failed {
            if let Some((_, listener)) = self.listeners.remove(id) {
                let _ = listener.tx.send(SnapshotEvent::Error(message.to_string()));
            }
        }

        tracing::warn!(
            collection = self.collection,
            count = failed.len(),
            error = message,
            "Listeners failed"
        );
        failed.len()
    }

    /// Number of attached listeners
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initial_snapshot_then_broadcast() {
        let set: ListenerSet<u32> = ListenerSet::new("numbers");
        let mut sub = set.subscribe(None, vec![1]);
        set.broadcast(None, &[1, 2]);

        assert_eq!(sub.next().await, Some(SnapshotEvent::Snapshot(vec![1])));
        assert_eq!(sub.next().await, Some(SnapshotEvent::Snapshot(vec![1, 2])));
    }

    #[tokio::test]
    async fn test_scope_filtering() {
        let set: ListenerSet<u32> = ListenerSet::new("messages");
        let club_a = RecordId::from("a");
        let club_b = RecordId::from("b");
        let mut sub_a = set.subscribe(Some(club_a.clone()), vec![]);
        let _sub_b = set.subscribe(Some(club_b.clone()), vec![]);

        set.broadcast(Some(&club_b), &[9]);
        set.broadcast(Some(&club_a), &[1]);

        assert_eq!(sub_a.next().await, Some(SnapshotEvent::Snapshot(vec![])));
        assert_eq!(sub_a.next().await, Some(SnapshotEvent::Snapshot(vec![1])));
    }

    #[tokio::test]
    async fn test_release_detaches() {
        let set: ListenerSet<u32> = ListenerSet::new("numbers");
        let sub = set.subscribe(None, vec![]);
        assert_eq!(set.len(), 1);
        sub.release();
        assert_eq!(set.len(), 0);
    }

    #[tokio::test]
    async fn test_fail_delivers_error_and_detaches() {
        let set: ListenerSet<u32> = ListenerSet::new("numbers");
        let mut sub = set.subscribe(None, vec![]);
        assert_eq!(set.fail(None, "permission denied"), 1);
        assert_eq!(set.len(), 0);

        assert_eq!(sub.next().await, Some(SnapshotEvent::Snapshot(vec![])));
        assert_eq!(
            sub.next().await,
            Some(SnapshotEvent::Error("permission denied".to_string()))
        );
        assert_eq!(sub.next().await, None);
    }
}
