//! Client management use cases.

use atelier_domain::common::optional_field;
use atelier_domain::{Client, ClientId, ClientStatus, NewClient, ProjectType};
use serde::{Deserialize, Serialize};

use super::validation::require_non_empty;
use super::ManagementError;
use crate::infrastructure::ports::ClockPort;
use crate::stores::ClientStore;

/// Raw values from the "add client" form. Blank optional fields become `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub project_type: ProjectType,
    pub status: ClientStatus,
    pub notes: String,
}

impl ClientForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    fn into_draft(self, clock: &dyn ClockPort) -> Result<NewClient, ManagementError> {
        require_non_empty(&self.name, "Client name")?;
        require_non_empty(&self.email, "Client email")?;

        let now = clock.now();
        Ok(NewClient {
            name: self.name,
            email: self.email,
            phone: optional_field(self.phone),
            company: optional_field(self.company),
            address: optional_field(self.address),
            city: optional_field(self.city),
            state: optional_field(self.state),
            zip_code: optional_field(self.zip_code),
            project_type: self.project_type,
            status: self.status,
            created_date: now,
            last_contact: now,
            notes: optional_field(self.notes),
        })
    }
}

/// Validated writes against the client store.
pub struct ClientManagement<'a> {
    clients: &'a mut ClientStore,
    clock: &'a dyn ClockPort,
}

impl<'a> ClientManagement<'a> {
    pub fn new(clients: &'a mut ClientStore, clock: &'a dyn ClockPort) -> Self {
        Self { clients, clock }
    }

    /// Add a client after checking name and email, stamping both dates.
    pub fn register(&mut self, form: ClientForm) -> Result<ClientId, ManagementError> {
        let draft = form.into_draft(self.clock).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected new client");
        })?;
        let id = self.clients.add(draft);
        tracing::info!(client_id = %id, "Client registered");
        Ok(id)
    }

    /// Replace a client record wholesale.
    pub fn edit(&mut self, client: Client) -> Result<(), ManagementError> {
        require_non_empty(&client.name, "Client name")?;
        require_non_empty(&client.email, "Client email")?;

        let id = client.id;
        if !self.clients.update(client) {
            return Err(ManagementError::not_found("Client", id));
        }
        tracing::info!(client_id = %id, "Client updated");
        Ok(())
    }

    /// Record that the firm has just been in contact with the client.
    pub fn touch(&mut self, id: ClientId) -> Result<(), ManagementError> {
        let mut client = self
            .clients
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| ManagementError::not_found("Client", id))?;
        client.last_contact = self.clock.now();
        self.clients.update(client);
        Ok(())
    }

    pub fn set_status(
        &mut self,
        id: ClientId,
        status: ClientStatus,
    ) -> Result<(), ManagementError> {
        let client = self
            .clients
            .get_by_id(id)
            .ok_or_else(|| ManagementError::not_found("Client", id))?;
        let updated = Client {
            status,
            ..client.clone()
        };
        self.clients.update(updated);
        Ok(())
    }

    /// Delete a client. Meetings referencing it are left in place.
    pub fn remove(&mut self, id: ClientId) -> Result<(), ManagementError> {
        if !self.clients.delete(id) {
            return Err(ManagementError::not_found("Client", id));
        }
        tracing::info!(client_id = %id, "Client removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::test_fixtures::{date, fixed_now};
    use atelier_domain::RecordId;

    #[test]
    fn register_stamps_dates_and_drops_blank_optionals() {
        let mut store = ClientStore::new();
        let clock = FixedClock(fixed_now());
        let mut form = ClientForm::new("Acme Corp", "a@acme.com");
        form.company = "  ".into();
        form.city = "Portland".into();
        form.status = ClientStatus::Prospect;

        let id = ClientManagement::new(&mut store, &clock)
            .register(form)
            .expect("valid client");

        assert_eq!(id, ClientId::FIRST);
        let client = store.get_by_id(id).expect("stored");
        assert_eq!(client.created_date, fixed_now());
        assert_eq!(client.last_contact, fixed_now());
        assert_eq!(client.company, None);
        assert_eq!(client.city.as_deref(), Some("Portland"));
    }

    #[test]
    fn register_requires_name_and_email() {
        let mut store = ClientStore::new();
        let clock = FixedClock(fixed_now());
        let mut clients = ClientManagement::new(&mut store, &clock);

        let err = clients
            .register(ClientForm::new("", "a@acme.com"))
            .expect_err("blank name");
        assert!(matches!(err, ManagementError::InvalidInput(_)));
        assert!(clients.register(ClientForm::new("Acme", " ")).is_err());

        assert!(store.is_empty());
    }

    #[test]
    fn edit_unknown_client_is_not_found_and_store_is_unchanged() {
        let mut store = ClientStore::new();
        let clock = FixedClock(fixed_now());
        let id = ClientManagement::new(&mut store, &clock)
            .register(ClientForm::new("Acme", "a@acme.com"))
            .expect("valid client");
        let mut ghost = store.get_by_id(id).cloned().expect("stored");
        ghost.id = id.next();
        let before = store.list();

        let err = ClientManagement::new(&mut store, &clock)
            .edit(ghost)
            .expect_err("unknown id");

        assert!(matches!(err, ManagementError::NotFound { entity: "Client", .. }));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn touch_moves_last_contact_only() {
        let mut store = ClientStore::new();
        let id = ClientManagement::new(&mut store, &FixedClock(fixed_now()))
            .register(ClientForm::new("Acme", "a@acme.com"))
            .expect("valid client");

        let later = FixedClock::on(date(2024, 7, 1));
        ClientManagement::new(&mut store, &later)
            .touch(id)
            .expect("client exists");

        let client = store.get_by_id(id).expect("stored");
        assert_eq!(client.created_date, fixed_now());
        assert_eq!(client.last_contact, later.0);
    }

    #[test]
    fn set_status_and_remove() {
        let mut store = ClientStore::new();
        let clock = FixedClock(fixed_now());
        let mut clients = ClientManagement::new(&mut store, &clock);
        let id = clients
            .register(ClientForm::new("Acme", "a@acme.com"))
            .expect("valid client");

        clients
            .set_status(id, ClientStatus::Active)
            .expect("client exists");
        clients.remove(id).expect("client exists");
        assert!(clients.remove(id).is_err());
        assert!(clients.set_status(id, ClientStatus::Inactive).is_err());

        assert!(store.is_empty());
    }
}
