//! In-memory state storage modules.
//!
//! Stores own their collections for the lifetime of the process and push a
//! fresh snapshot to subscribers after every mutation:
//! - `ClientStore` - Client records plus search and status filters
//! - `MeetingStore` - Meeting records plus date-based queries
//! - `RecordStore` - Shared id assignment, replacement, and publishing

pub mod client;
pub mod meeting;
pub mod record_store;

// Re-export store types
pub use client::ClientStore;
pub use meeting::MeetingStore;
pub use record_store::RecordStore;
