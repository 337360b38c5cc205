//! Domain entities - Core business objects with identity

mod client;
mod meeting;

pub use client::{Client, ClientStatus, NewClient, ProjectType};
pub use meeting::{
    Meeting, MeetingStatus, MeetingType, NewMeeting, DEFAULT_MEETING_DURATION,
    DEFAULT_MEETING_LOCATION, DEFAULT_MEETING_TIME,
};
