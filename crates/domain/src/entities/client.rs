//! Client entity - A person or organisation the firm works for
//!
//! Clients are created from a [`NewClient`] draft, receive a store-assigned
//! [`ClientId`], and are afterwards replaced wholesale on edit.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::contains_ignore_case;
use crate::error::DomainError;
use crate::ids::ClientId;
use crate::record::Record;

/// Kind of project the client is engaged for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    #[default]
    Residential,
    Commercial,
    Industrial,
    #[serde(rename = "Mixed Use")]
    MixedUse,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Industrial,
        ProjectType::MixedUse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Industrial => "Industrial",
            ProjectType::MixedUse => "Mixed Use",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "residential" => Ok(ProjectType::Residential),
            "commercial" => Ok(ProjectType::Commercial),
            "industrial" => Ok(ProjectType::Industrial),
            "mixed use" | "mixed-use" => Ok(ProjectType::MixedUse),
            _ => Err(DomainError::parse(format!("Unknown project type: {}", s))),
        }
    }
}

/// Relationship state of a client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Inactive,
    #[default]
    Prospect,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
            ClientStatus::Prospect => "prospect",
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ClientStatus::Active),
            "inactive" => Ok(ClientStatus::Inactive),
            "prospect" => Ok(ClientStatus::Prospect),
            _ => Err(DomainError::parse(format!("Unknown client status: {}", s))),
        }
    }
}

/// A client record without its identity, as submitted for creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub project_type: ProjectType,
    pub status: ClientStatus,
    pub created_date: DateTime<Utc>,
    pub last_contact: DateTime<Utc>,
    pub notes: Option<String>,
}

impl NewClient {
    /// Starts a draft with the two required fields. Both timestamps are set
    /// to `now`; the project type and status take the form defaults.
    pub fn new(name: impl Into<String>, email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            company: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            project_type: ProjectType::default(),
            status: ClientStatus::default(),
            created_date: now,
            last_contact: now,
            notes: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_address(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        self.address = Some(address.into());
        self.city = Some(city.into());
        self.state = Some(state.into());
        self.zip_code = Some(zip_code.into());
        self
    }

    pub fn with_project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    pub fn with_status(mut self, status: ClientStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A client of the firm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub project_type: ProjectType,
    pub status: ClientStatus,
    pub created_date: DateTime<Utc>,
    pub last_contact: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Client {
    /// Case-insensitive match against name, company, email and project type.
    ///
    /// `query` must already be lowercased.
    pub fn matches_search(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query)
            || self
                .company
                .as_deref()
                .is_some_and(|company| contains_ignore_case(company, query))
            || contains_ignore_case(&self.email, query)
            || contains_ignore_case(self.project_type.as_str(), query)
    }

    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }
}

impl Record for Client {
    type Id = ClientId;
    type Draft = NewClient;

    const KIND: &'static str = "Client";

    fn id(&self) -> ClientId {
        self.id
    }

    fn from_draft(id: ClientId, draft: NewClient) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            company: draft.company,
            address: draft.address,
            city: draft.city,
            state: draft.state,
            zip_code: draft.zip_code,
            project_type: draft.project_type,
            status: draft.status,
            created_date: draft.created_date,
            last_contact: draft.last_contact,
            notes: draft.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordId;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn client() -> Client {
        Client::from_draft(
            ClientId::FIRST,
            NewClient::new("Jane Doe", "jane@acme.com", now())
                .with_company("Acme Corp")
                .with_project_type(ProjectType::MixedUse),
        )
    }

    #[test]
    fn draft_defaults_match_the_add_form() {
        let draft = NewClient::new("Jane", "jane@example.com", now());
        assert_eq!(draft.project_type, ProjectType::Residential);
        assert_eq!(draft.status, ClientStatus::Prospect);
        assert_eq!(draft.created_date, draft.last_contact);
    }

    #[test]
    fn search_matches_each_searchable_field() {
        let client = client();
        assert!(client.matches_search("jane"));
        assert!(client.matches_search("acme corp"));
        assert!(client.matches_search("@acme.com"));
        assert!(client.matches_search("mixed use"));
        assert!(!client.matches_search("residential"));
    }

    #[test]
    fn search_ignores_fields_outside_the_search_set() {
        let mut client = client();
        client.city = Some("Springfield".into());
        client.notes = Some("prefers mornings".into());
        assert!(!client.matches_search("springfield"));
        assert!(!client.matches_search("mornings"));
    }

    #[test]
    fn missing_company_does_not_match() {
        let mut client = client();
        client.company = None;
        assert!(!client.matches_search("corp"));
    }

    #[test]
    fn project_type_round_trips_through_wire_strings() {
        for project_type in ProjectType::ALL {
            assert_eq!(project_type.as_str().parse::<ProjectType>(), Ok(project_type));
        }
        assert_eq!(
            serde_json::to_string(&ProjectType::MixedUse).expect("serialize"),
            "\"Mixed Use\""
        );
        assert!("Agricultural".parse::<ProjectType>().is_err());
    }

    #[test]
    fn client_status_parses_case_insensitively() {
        assert_eq!("Active".parse::<ClientStatus>(), Ok(ClientStatus::Active));
        assert_eq!("PROSPECT".parse::<ClientStatus>(), Ok(ClientStatus::Prospect));
        assert!("archived".parse::<ClientStatus>().is_err());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(client()).expect("serialize");
        assert_eq!(json["id"], 1);
        assert_eq!(json["projectType"], "Mixed Use");
        assert_eq!(json["status"], "prospect");
        assert!(json.get("createdDate").is_some());
        assert!(json.get("lastContact").is_some());
        assert!(json.get("zipCode").is_some());
    }
}
