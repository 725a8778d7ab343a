//! Typed resolver errors.

use thiserror::Error;

/// Errors surfaced by resolvers. `async_graphql::Error` converts from any
/// `Display` type, so these propagate with `?` and the engine renders them
/// into its standard error envelope; nothing here panics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolverError {
    /// `kill` was given an id that is not in the roster.
    #[error("no user with id {0}")]
    UnknownUser(i64),
}
