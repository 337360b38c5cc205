//! Generic owned collection with snapshot publishing.
//!
//! Both stores share the same write contract:
//! - `add` assigns `max(existing id) + 1`, or the first id when empty
//! - `update` replaces a record wholesale; unknown ids are a silent no-op
//! - `delete` removes by id; unknown ids are a silent no-op
//! - every `add`, `update` and `delete` publishes, even when nothing changed

use std::sync::Arc;

use atelier_domain::{Record, RecordId};

use crate::infrastructure::event_bus::{Snapshot, SnapshotBus, SubscriptionId};

/// Insertion-ordered collection of records owned by a single store.
pub struct RecordStore<T: Record> {
    records: Vec<T>,
    bus: SnapshotBus<T>,
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            bus: SnapshotBus::new(),
        }
    }

    /// Copy of the current collection, in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Current collection as a shareable snapshot.
    pub fn snapshot(&self) -> Snapshot<T> {
        Arc::from(self.records.as_slice())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Records matching `predicate`, in insertion order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> T::Id {
        self.records
            .iter()
            .map(T::id)
            .max()
            .map_or(<T::Id as RecordId>::FIRST, <T::Id as RecordId>::next)
    }

    pub fn add(&mut self, draft: T::Draft) -> T::Id {
        let id = self.next_id();
        self.records.push(T::from_draft(id, draft));
        tracing::debug!(kind = T::KIND, id = %id, "Record added");
        self.publish();
        id
    }

    /// Replace the record with the same id. Returns whether one was replaced.
    pub fn update(&mut self, record: T) -> bool {
        let id = record.id();
        let replaced = match self.records.iter_mut().find(|existing| existing.id() == id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        };
        tracing::debug!(kind = T::KIND, id = %id, replaced, "Record update");
        self.publish();
        replaced
    }

    /// Remove the record with `id`. Returns whether one was removed.
    pub fn delete(&mut self, id: T::Id) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        let removed = self.records.len() != before;
        tracing::debug!(kind = T::KIND, id = %id, removed, "Record delete");
        self.publish();
        removed
    }

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(Snapshot<T>) + Send + 'static,
    ) -> SubscriptionId {
        let current = self.snapshot();
        self.bus.subscribe(current, observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.bus.publish(snapshot);
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
