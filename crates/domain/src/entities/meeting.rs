//! Meeting entity - A scheduled appointment with a client
//!
//! `client_name` is copied from the referenced client when the meeting is
//! created or edited. It is a display snapshot, not a maintained relation:
//! renaming the client later does not touch existing meetings, and
//! `client_id` may point at a client that no longer exists.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::contains_ignore_case;
use crate::error::DomainError;
use crate::ids::{ClientId, MeetingId};
use crate::record::Record;

/// Default start time offered by the scheduling form
pub const DEFAULT_MEETING_TIME: &str = "10:00";
/// Default duration in minutes
pub const DEFAULT_MEETING_DURATION: u32 = 60;
/// Default meeting location
pub const DEFAULT_MEETING_LOCATION: &str = "Office";

/// Purpose of a meeting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingType {
    #[default]
    Consultation,
    ProjectReview,
    Presentation,
    SiteVisit,
    FollowUp,
}

impl MeetingType {
    pub const ALL: [MeetingType; 5] = [
        MeetingType::Consultation,
        MeetingType::ProjectReview,
        MeetingType::Presentation,
        MeetingType::SiteVisit,
        MeetingType::FollowUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingType::Consultation => "consultation",
            MeetingType::ProjectReview => "project-review",
            MeetingType::Presentation => "presentation",
            MeetingType::SiteVisit => "site-visit",
            MeetingType::FollowUp => "follow-up",
        }
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "consultation" => Ok(MeetingType::Consultation),
            "project-review" => Ok(MeetingType::ProjectReview),
            "presentation" => Ok(MeetingType::Presentation),
            "site-visit" => Ok(MeetingType::SiteVisit),
            "follow-up" => Ok(MeetingType::FollowUp),
            _ => Err(DomainError::parse(format!("Unknown meeting type: {}", s))),
        }
    }
}

/// Lifecycle status of a meeting.
///
/// Transitions are not enforced; callers replace the whole record with
/// whatever status they need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => "scheduled",
            MeetingStatus::Completed => "completed",
            MeetingStatus::Cancelled => "cancelled",
            MeetingStatus::Rescheduled => "rescheduled",
        }
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(MeetingStatus::Scheduled),
            "completed" => Ok(MeetingStatus::Completed),
            "cancelled" => Ok(MeetingStatus::Cancelled),
            "rescheduled" => Ok(MeetingStatus::Rescheduled),
            _ => Err(DomainError::parse(format!("Unknown meeting status: {}", s))),
        }
    }
}

/// A meeting without its identity, as submitted for creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeeting {
    pub client_id: ClientId,
    pub client_name: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Free-form start time, usually "HH:MM"
    pub time: String,
    /// Length in minutes
    pub duration: u32,
    pub location: String,
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    pub status: MeetingStatus,
    pub notes: Option<String>,
    pub created_date: DateTime<Utc>,
}

impl NewMeeting {
    pub fn new(
        client_id: ClientId,
        client_name: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            client_id,
            client_name: client_name.into(),
            title: title.into(),
            description: String::new(),
            date,
            time: DEFAULT_MEETING_TIME.to_string(),
            duration: DEFAULT_MEETING_DURATION,
            location: DEFAULT_MEETING_LOCATION.to_string(),
            meeting_type: MeetingType::default(),
            status: MeetingStatus::default(),
            notes: None,
            created_date: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn at(mut self, time: impl Into<String>, duration: u32) -> Self {
        self.time = time.into();
        self.duration = duration;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_type(mut self, meeting_type: MeetingType) -> Self {
        self.meeting_type = meeting_type;
        self
    }

    pub fn with_status(mut self, status: MeetingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A meeting with a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: MeetingId,
    pub client_id: ClientId,
    /// Client name captured at creation/edit time
    pub client_name: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: u32,
    pub location: String,
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    pub status: MeetingStatus,
    pub notes: Option<String>,
    pub created_date: DateTime<Utc>,
}

impl Meeting {
    pub fn is_scheduled(&self) -> bool {
        self.status == MeetingStatus::Scheduled
    }

    /// Case-insensitive match against title, client name, description and
    /// location. `query` must already be lowercased.
    pub fn matches_search(&self, query: &str) -> bool {
        contains_ignore_case(&self.title, query)
            || contains_ignore_case(&self.client_name, query)
            || contains_ignore_case(&self.description, query)
            || contains_ignore_case(&self.location, query)
    }

    /// Copy of this meeting with a different status, for full-record updates.
    pub fn with_status(&self, status: MeetingStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl Record for Meeting {
    type Id = MeetingId;
    type Draft = NewMeeting;

    const KIND: &'static str = "Meeting";

    fn id(&self) -> MeetingId {
        self.id
    }

    fn from_draft(id: MeetingId, draft: NewMeeting) -> Self {
        Self {
            id,
            client_id: draft.client_id,
            client_name: draft.client_name,
            title: draft.title,
            description: draft.description,
            date: draft.date,
            time: draft.time,
            duration: draft.duration,
            location: draft.location,
            meeting_type: draft.meeting_type,
            status: draft.status,
            notes: draft.notes,
            created_date: draft.created_date,
        }
    }
}
