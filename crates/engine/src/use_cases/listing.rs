//! List filters applied by the client and meeting list screens.
//!
//! These run over a snapshot the screen already holds and never touch the
//! stores. An empty search term or an unset status/type means "don't filter
//! on this".

use atelier_domain::{Client, ClientStatus, Meeting, MeetingStatus, MeetingType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientFilter {
    pub search: String,
    pub status: Option<ClientStatus>,
}

impl ClientFilter {
    /// Matching clients, in snapshot order.
    pub fn apply(&self, clients: &[Client]) -> Vec<Client> {
        let query = self.search.to_lowercase();
        clients
            .iter()
            .filter(|client| query.is_empty() || client.matches_search(&query))
            .filter(|client| self.status.map_or(true, |status| client.status == status))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingFilter {
    pub search: String,
    pub status: Option<MeetingStatus>,
    #[serde(rename = "type")]
    pub meeting_type: Option<MeetingType>,
}

impl MeetingFilter {
    /// Matching meetings ordered by date, earliest first.
    pub fn apply(&self, meetings: &[Meeting]) -> Vec<Meeting> {
        let query = self.search.to_lowercase();
        let mut matched: Vec<Meeting> = meetings
            .iter()
            .filter(|meeting| query.is_empty() || meeting.matches_search(&query))
            .filter(|meeting| self.status.map_or(true, |status| meeting.status == status))
            .filter(|meeting| {
                self.meeting_type
                    .map_or(true, |meeting_type| meeting.meeting_type == meeting_type)
            })
            .cloned()
            .collect();
        matched.sort_by_key(|meeting| meeting.date);
        matched
    }
}

/// A meeting dated before `today` that was not marked completed. Meetings
/// dated today are not past.
pub fn is_past_meeting(meeting: &Meeting, today: NaiveDate) -> bool {
    meeting.date < today && meeting.status != MeetingStatus::Completed
}
