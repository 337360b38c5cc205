//! Use cases sitting between the presentation layer and the stores.
//!
//! The stores never reject input; required-field checks, timestamps from the
//! clock, and "unknown id" reporting live here.

pub mod clients;
pub mod dashboard;
pub mod listing;
pub mod meetings;
pub mod validation;

pub use clients::{ClientForm, ClientManagement};
pub use dashboard::DashboardSummary;
pub use listing::{is_past_meeting, ClientFilter, MeetingFilter};
pub use meetings::{MeetingForm, MeetingScheduling};
pub use validation::ValidationError;

use atelier_domain::DomainError;

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl ManagementError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
