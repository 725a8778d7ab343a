//! Static fixture data for the westeros gateway.
//!
//! The entire data layer is two small in-memory collections: the user roster
//! and the directed friendship edges between its members. Both are seeded
//! from literal lists at construction and never mutated afterwards, so the
//! store can be shared freely across concurrent resolver invocations.

mod fixtures;
mod records;
mod store;

pub use {
    records::{FriendLink, UserRecord},
    store::FixtureStore,
};
