//! GraphQL API for the westeros gateway.
//!
//! Defines the schema, resolvers, and output types for a small demo
//! endpoint: a fixture roster with a friends projection, a `kill` mutation,
//! and a `characterKilled` subscription bridged over a broadcast channel.
//! The schema is served at `/graphql` (GraphiQL on GET, queries on POST,
//! subscriptions via WebSocket upgrade on GET).
//!
//! The gateway crate is responsible for building the HTTP handlers and
//! wiring them into the router. This crate only defines the schema, types,
//! and resolvers.

pub mod context;
pub mod error;
pub mod events;
pub mod mutations;
pub mod queries;
pub mod schema;
pub mod subscriptions;
pub mod types;

pub use schema::{WesterosSchema, build_schema};
