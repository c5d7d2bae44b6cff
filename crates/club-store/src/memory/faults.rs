//! Fault injection for exercising failure paths against the in-memory store

use club_core::DomainError;
use parking_lot::RwLock;
use std::collections::HashSet;

/// Store operations that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultPoint {
    /// Document and query reads
    Reads,
    /// Message sub-collection counts
    Counts,
    /// Document writes and field updates
    Writes,
    /// Attaching new listeners
    Subscriptions,
}

#[derive(Debug, Default)]
pub(crate) struct Faults {
    active: RwLock<HashSet<FaultPoint>>,
}

impl Faults {
    pub(crate) fn set(&self, point: FaultPoint, failing: bool) {
        let mut active = self.active.write();
        if failing {
            active.insert(point);
        } else {
            active.remove(&point);
        }
    }

    pub(crate) fn clear(&self) {
        self.active.write().clear();
    }

    /// Fail with a persistence error if `point` is armed
    pub(crate) fn check(&self, point: FaultPoint) -> Result<(), DomainError> {
        if self.active.read().contains(&point) {
            tracing::debug!(?point, "Injected store fault");
            return Err(DomainError::persistence(format!(
                "injected {point:?} failure"
            )));
        }
        Ok(())
    }
}
