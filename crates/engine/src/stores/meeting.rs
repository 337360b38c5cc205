//! Meeting storage for runtime state.
//!
//! Same write contract as `ClientStore`, plus date-based queries evaluated
//! against the injected clock's calendar day.

use std::sync::Arc;

use atelier_domain::{ClientId, Meeting, MeetingId, NewMeeting};
use chrono::NaiveDate;

use crate::infrastructure::event_bus::{Snapshot, SubscriptionId};
use crate::infrastructure::ports::ClockPort;
use crate::stores::RecordStore;

/// In-memory store of meetings.
pub struct MeetingStore {
    inner: RecordStore<Meeting>,
    clock: Arc<dyn ClockPort>,
}

impl MeetingStore {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            inner: RecordStore::new(),
            clock,
        }
    }

    /// Copy of all meetings, in insertion order.
    pub fn list(&self) -> Vec<Meeting> {
        self.inner.list()
    }

    pub fn snapshot(&self) -> Snapshot<Meeting> {
        self.inner.snapshot()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Receive the current meetings now and after every change.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(Snapshot<Meeting>) + Send + 'static,
    ) -> SubscriptionId {
        self.inner.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }

    pub fn get_by_id(&self, id: MeetingId) -> Option<&Meeting> {
        self.inner.get(id)
    }

    /// Add a meeting and return its assigned id.
    pub fn add(&mut self, meeting: NewMeeting) -> MeetingId {
        self.inner.add(meeting)
    }

    pub fn update(&mut self, meeting: Meeting) -> bool {
        self.inner.update(meeting)
    }

    pub fn delete(&mut self, id: MeetingId) -> bool {
        self.inner.delete(id)
    }

    pub fn by_client(&self, client_id: ClientId) -> Vec<Meeting> {
        self.inner.filter(|meeting| meeting.client_id == client_id)
    }

    /// Scheduled meetings dated today or later, earliest first.
    ///
    /// Meetings sharing a date keep their insertion order.
    pub fn upcoming(&self) -> Vec<Meeting> {
        self.upcoming_from(self.clock.today())
    }

    /// Scheduled meetings dated today.
    pub fn today(&self) -> Vec<Meeting> {
        let today = self.clock.today();
        self.inner
            .filter(|meeting| meeting.date == today && meeting.is_scheduled())
    }

    /// Meetings dated within `[start, end]`, whatever their status.
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Meeting> {
        self.inner
            .filter(|meeting| start <= meeting.date && meeting.date <= end)
    }

    fn upcoming_from(&self, today: NaiveDate) -> Vec<Meeting> {
        let mut meetings = self
            .inner
            .filter(|meeting| meeting.date >= today && meeting.is_scheduled());
        meetings.sort_by_key(|meeting| meeting.date);
        meetings
    }
}
