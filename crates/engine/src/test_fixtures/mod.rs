//! Shared builders for unit tests.

use std::sync::Arc;

use atelier_domain::{ClientId, NewClient, NewMeeting};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::ports::ClockPort;

/// 2024-06-10 09:00 UTC, a Monday.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn clock_on(today: NaiveDate) -> Arc<dyn ClockPort> {
    Arc::new(FixedClock::on(today))
}

pub fn client_draft(name: &str, email: &str) -> NewClient {
    NewClient::new(name, email, fixed_now())
}

pub fn meeting_draft(client_id: ClientId, title: &str, on: NaiveDate) -> NewMeeting {
    NewMeeting::new(client_id, "Jane Doe", title, on, fixed_now())
}
