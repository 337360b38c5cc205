//! Meeting scheduling use cases.
//!
//! Scheduling copies the client's current name onto the meeting. That copy
//! is refreshed on edit but never kept in sync otherwise.

use atelier_domain::common::{optional_field, parse_calendar_date};
use atelier_domain::{
    ClientId, Meeting, MeetingId, MeetingStatus, MeetingType, NewMeeting,
    DEFAULT_MEETING_DURATION, DEFAULT_MEETING_LOCATION, DEFAULT_MEETING_TIME,
};
use serde::{Deserialize, Serialize};

use super::validation::{require_non_empty, require_positive, require_present};
use super::ManagementError;
use crate::infrastructure::ports::ClockPort;
use crate::stores::{ClientStore, MeetingStore};

/// Raw values from the "schedule meeting" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingForm {
    pub client_id: Option<ClientId>,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD` as produced by a date input
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub location: String,
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    pub notes: String,
}

impl Default for MeetingForm {
    fn default() -> Self {
        Self {
            client_id: None,
            title: String::new(),
            description: String::new(),
            date: String::new(),
            time: DEFAULT_MEETING_TIME.to_string(),
            duration: DEFAULT_MEETING_DURATION,
            location: DEFAULT_MEETING_LOCATION.to_string(),
            meeting_type: MeetingType::default(),
            notes: String::new(),
        }
    }
}

impl MeetingForm {
    pub fn new(client_id: ClientId, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id),
            title: title.into(),
            date: date.into(),
            ..Self::default()
        }
    }
}

/// Validated writes against the meeting store.
pub struct MeetingScheduling<'a> {
    meetings: &'a mut MeetingStore,
    clients: &'a ClientStore,
    clock: &'a dyn ClockPort,
}

impl<'a> MeetingScheduling<'a> {
    pub fn new(
        meetings: &'a mut MeetingStore,
        clients: &'a ClientStore,
        clock: &'a dyn ClockPort,
    ) -> Self {
        Self {
            meetings,
            clients,
            clock,
        }
    }

    /// Schedule a new meeting. Requires a title, an existing client, a date,
    /// and a non-zero duration.
    pub fn schedule(&mut self, form: MeetingForm) -> Result<MeetingId, ManagementError> {
        let draft = self.draft_from(form).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected new meeting");
        })?;
        let client_id = draft.client_id;
        let id = self.meetings.add(draft);
        tracing::info!(meeting_id = %id, client_id = %client_id, "Meeting scheduled");
        Ok(id)
    }

    /// Replace a meeting wholesale, refreshing the copied client name when
    /// the client still exists.
    pub fn edit(&mut self, mut meeting: Meeting) -> Result<(), ManagementError> {
        require_non_empty(&meeting.title, "Meeting title")?;
        require_positive(meeting.duration, "Meeting duration")?;

        if let Some(client) = self.clients.get_by_id(meeting.client_id) {
            meeting.client_name = client.name.clone();
        }

        let id = meeting.id;
        if !self.meetings.update(meeting) {
            return Err(ManagementError::not_found("Meeting", id));
        }
        tracing::info!(meeting_id = %id, "Meeting updated");
        Ok(())
    }

    pub fn complete(&mut self, id: MeetingId) -> Result<(), ManagementError> {
        self.set_status(id, MeetingStatus::Completed)
    }

    pub fn reschedule(&mut self, id: MeetingId) -> Result<(), ManagementError> {
        self.set_status(id, MeetingStatus::Rescheduled)
    }

    pub fn cancel(&mut self, id: MeetingId) -> Result<(), ManagementError> {
        self.set_status(id, MeetingStatus::Cancelled)
    }

    /// Any status may follow any other; the record is replaced with the new
    /// status and everything else unchanged.
    pub fn set_status(
        &mut self,
        id: MeetingId,
        status: MeetingStatus,
    ) -> Result<(), ManagementError> {
        let updated = self
            .meetings
            .get_by_id(id)
            .map(|meeting| meeting.with_status(status))
            .ok_or_else(|| ManagementError::not_found("Meeting", id))?;
        self.meetings.update(updated);
        tracing::info!(meeting_id = %id, status = %status, "Meeting status changed");
        Ok(())
    }

    pub fn remove(&mut self, id: MeetingId) -> Result<(), ManagementError> {
        if !self.meetings.delete(id) {
            return Err(ManagementError::not_found("Meeting", id));
        }
        tracing::info!(meeting_id = %id, "Meeting removed");
        Ok(())
    }

    fn draft_from(&self, form: MeetingForm) -> Result<NewMeeting, ManagementError> {
        require_non_empty(&form.title, "Meeting title")?;
        let client_id = require_present(form.client_id, "Client")?;
        let date = parse_calendar_date(&form.date)?;
        require_positive(form.duration, "Meeting duration")?;

        let client = self
            .clients
            .get_by_id(client_id)
            .ok_or_else(|| ManagementError::not_found("Client", client_id))?;

        let mut draft = NewMeeting::new(
            client_id,
            client.name.clone(),
            form.title,
            date,
            self.clock.now(),
        )
        .with_description(form.description)
        .at(form.time, form.duration)
        .with_location(form.location)
        .with_type(form.meeting_type);
        draft.notes = optional_field(form.notes);
        Ok(draft)
    }
}
