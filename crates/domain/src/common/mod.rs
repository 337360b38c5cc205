//! Small pure helpers shared by the record types and the engine's views.

pub mod datetime;
pub mod string;

pub use datetime::parse_calendar_date;
pub use string::{contains_ignore_case, is_blank, optional_field};
