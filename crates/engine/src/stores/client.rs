//! Client storage for runtime state.
//!
//! Owns every `Client` record for the lifetime of the process. Writes never
//! fail: unknown ids on update/delete are silent no-ops, and required-field
//! checks belong to the caller (see `use_cases::clients`).

use atelier_domain::{Client, ClientId, ClientStatus, NewClient};

use crate::infrastructure::event_bus::{Snapshot, SubscriptionId};
use crate::stores::RecordStore;

/// In-memory store of clients.
pub struct ClientStore {
    inner: RecordStore<Client>,
}

impl ClientStore {
    pub fn new() -> Self {
        Self {
            inner: RecordStore::new(),
        }
    }

    /// Copy of all clients, in insertion order.
    pub fn list(&self) -> Vec<Client> {
        self.inner.list()
    }

    pub fn snapshot(&self) -> Snapshot<Client> {
        self.inner.snapshot()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Receive the current clients now and after every change.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(Snapshot<Client>) + Send + 'static,
    ) -> SubscriptionId {
        self.inner.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }

    pub fn get_by_id(&self, id: ClientId) -> Option<&Client> {
        self.inner.get(id)
    }

    /// Add a client and return its assigned id.
    pub fn add(&mut self, client: NewClient) -> ClientId {
        self.inner.add(client)
    }

    pub fn update(&mut self, client: Client) -> bool {
        self.inner.update(client)
    }

    pub fn delete(&mut self, id: ClientId) -> bool {
        self.inner.delete(id)
    }

    /// Case-insensitive substring search over name, company, email and
    /// project type.
    pub fn search(&self, query: &str) -> Vec<Client> {
        let query = query.to_lowercase();
        self.inner.filter(|client| client.matches_search(&query))
    }

    pub fn filter_by_status(&self, status: ClientStatus) -> Vec<Client> {
        self.inner.filter(|client| client.status == status)
    }
}

impl Default for ClientStore {
    fn default() -> Self {
        Self::new()
    }
}
