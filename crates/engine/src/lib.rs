//! Atelier Engine library.
//!
//! In-process client and meeting management for a small architectural
//! practice.
//!
//! ## Structure
//!
//! - `stores/` - Owned collections that publish snapshots on every write
//! - `use_cases/` - Validated writes, list filters, and the dashboard summary
//! - `infrastructure/` - Clock port, configuration, and the snapshot bus
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures module for unit tests.
#[cfg(test)]
pub mod test_fixtures;

/// Scenario tests exercising both stores end to end.
#[cfg(test)]
mod store_scenario_tests;

pub use app::App;
