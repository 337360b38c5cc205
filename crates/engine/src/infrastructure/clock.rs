//! Clock implementations.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use crate::infrastructure::ports::ClockPort;

/// System clock - uses real time.
///
/// `today()` is evaluated in the configured offset so that a meeting dated
/// for the firm's local calendar day counts as "today" regardless of the
/// host's timezone.
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::with_offset(Utc.fix())
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Calendar date in the configured offset at the instant `now`.
    pub fn today_at(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        self.today_at(self.now())
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl FixedClock {
    /// Clock pinned to noon UTC on the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(12, 0, 0).expect("valid time").and_utc())
    }
}

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
