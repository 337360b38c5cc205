//! Infrastructure: ports and their in-process implementations.

pub mod clock;
pub mod config;
pub mod event_bus;
pub mod ports;
