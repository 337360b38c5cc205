//! Snapshot bus for pushing store contents to observers.
//!
//! Push-based: subscribers register callbacks that are invoked synchronously,
//! in subscription order, every time the owning store publishes. A new
//! subscriber is handed the current snapshot straight away so it never has to
//! ask for the initial state separately.

use std::sync::Arc;

/// Immutable copy of a store's collection at one point in time.
pub type Snapshot<T> = Arc<[T]>;

type Observer<T> = Box<dyn FnMut(Snapshot<T>) + Send + 'static>;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Synchronous fan-out of snapshots to every registered observer.
pub struct SnapshotBus<T> {
    subscribers: Vec<(SubscriptionId, Observer<T>)>,
    next_subscription: u64,
}

impl<T> SnapshotBus<T> {
    /// Create a new bus with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Register an observer and deliver `current` to it immediately.
    pub fn subscribe(
        &mut self,
        current: Snapshot<T>,
        observer: impl FnMut(Snapshot<T>) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        let mut observer: Observer<T> = Box::new(observer);
        observer(current);
        self.subscribers.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Deliver a snapshot to every subscriber.
    ///
    /// Each subscriber receives its own handle to the same shared snapshot.
    pub fn publish(&mut self, snapshot: Snapshot<T>) {
        tracing::trace!(
            subscribers = self.subscribers.len(),
            records = snapshot.len(),
            "Publishing snapshot"
        );
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(Arc::clone(&snapshot));
        }
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T> Default for SnapshotBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
