//! Dashboard summary computed from the two stores.

use atelier_domain::{Client, Meeting};
use serde::Serialize;

use crate::stores::{ClientStore, MeetingStore};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_clients: usize,
    pub active_clients: usize,
    pub upcoming_meetings: Vec<Meeting>,
    pub todays_meetings: Vec<Meeting>,
    /// Newest first, capped at the configured limit
    pub recent_clients: Vec<Client>,
}

impl DashboardSummary {
    pub fn compute(clients: &ClientStore, meetings: &MeetingStore, recent_limit: usize) -> Self {
        let snapshot = clients.snapshot();
        Self {
            total_clients: snapshot.len(),
            active_clients: snapshot.iter().filter(|c| c.is_active()).count(),
            upcoming_meetings: meetings.upcoming(),
            todays_meetings: meetings.today(),
            recent_clients: recent_clients(&snapshot, recent_limit),
        }
    }
}

/// Clients ordered by creation date, newest first. Ties keep snapshot order.
pub fn recent_clients(clients: &[Client], limit: usize) -> Vec<Client> {
    let mut sorted = clients.to_vec();
    sorted.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    sorted.truncate(limit);
    sorted
}
