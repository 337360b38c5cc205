//! Port traits for dependencies injected into the stores and use cases.

use chrono::{DateTime, NaiveDate, Utc};

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of the current time and the firm's current calendar date.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date used for "today" and "upcoming" queries.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
