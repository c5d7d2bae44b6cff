//! Real-time change notifications from the store

mod snapshot;

pub use snapshot::{SnapshotEvent, Subscription};
