//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ports::ClockPort;
use crate::stores::{ClientStore, MeetingStore};
use crate::use_cases::{
    ClientForm, ClientManagement, DashboardSummary, ManagementError, MeetingForm,
    MeetingScheduling,
};

/// Main application state.
///
/// Owns both stores for the lifetime of the process. Constructed empty on
/// every start; nothing is persisted.
pub struct App {
    pub clients: ClientStore,
    pub meetings: MeetingStore,
    clock: Arc<dyn ClockPort>,
    config: AppConfig,
}

impl App {
    pub fn new(clock: Arc<dyn ClockPort>, config: AppConfig) -> Self {
        Self {
            clients: ClientStore::new(),
            meetings: MeetingStore::new(clock.clone()),
            clock,
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn client_management(&mut self) -> ClientManagement<'_> {
        ClientManagement::new(&mut self.clients, self.clock.as_ref())
    }

    pub fn scheduling(&mut self) -> MeetingScheduling<'_> {
        MeetingScheduling::new(&mut self.meetings, &self.clients, self.clock.as_ref())
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.clients, &self.meetings, self.config.recent_clients)
    }

    /// Populate the stores with a few sample records for local runs.
    pub fn seed_demo(&mut self) -> Result<(), ManagementError> {
        let today = self.clock.today();
        let in_days = |days: u64| {
            today
                .checked_add_days(chrono::Days::new(days))
                .unwrap_or(today)
                .format("%Y-%m-%d")
                .to_string()
        };

        let mut harbor = ClientForm::new("Maya Lin", "maya@harborworks.com");
        harbor.company = "Harbor Works".into();
        harbor.project_type = "Commercial".parse()?;
        harbor.status = "active".parse()?;
        let harbor = self.client_management().register(harbor)?;

        let mut cottage = ClientForm::new("Tom Reyes", "tom.reyes@example.com");
        cottage.city = "Bend".into();
        let cottage = self.client_management().register(cottage)?;

        let mut kickoff = MeetingForm::new(harbor, "Design kickoff", in_days(0));
        kickoff.description = "Scope and budget for the waterfront office".into();
        self.scheduling().schedule(kickoff)?;

        let mut visit = MeetingForm::new(cottage, "Lot survey", in_days(3));
        visit.meeting_type = "site-visit".parse()?;
        visit.location = "Bend, OR".into();
        visit.duration = 120;
        self.scheduling().schedule(visit)?;

        tracing::info!(
            clients = self.clients.len(),
            meetings = self.meetings.len(),
            "Seeded demo data"
        );
        Ok(())
    }
}
