pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod record;

pub use entities::{
    Client, ClientStatus, Meeting, MeetingStatus, MeetingType, NewClient, NewMeeting, ProjectType,
    DEFAULT_MEETING_DURATION, DEFAULT_MEETING_LOCATION, DEFAULT_MEETING_TIME,
};

pub use error::DomainError;

pub use ids::{ClientId, MeetingId};

pub use record::{Record, RecordId};
