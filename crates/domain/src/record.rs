//! Shared shape of records owned by an in-memory store.
//!
//! Both clients and meetings are created from a draft (the record without
//! its id), receive a store-assigned id, and are afterwards only ever
//! replaced wholesale or removed.

use std::fmt;
use std::hash::Hash;

/// Positive, totally ordered identity assigned by a store.
pub trait RecordId: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display {
    /// Id given to the first record of an empty collection.
    const FIRST: Self;

    /// The id that follows `self`.
    fn next(self) -> Self;
}

/// A record with a store-assigned identity.
pub trait Record: Clone {
    type Id: RecordId;

    /// The record without its identity, as handed to `add`.
    type Draft;

    /// Human-readable record kind used in logs and errors.
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    /// Builds the stored record from its draft and the assigned id.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;
}
