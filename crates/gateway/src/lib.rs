//! Gateway: HTTP server wiring the westeros GraphQL schema to the outside.
//!
//! Lifecycle:
//! 1. Load config
//! 2. Seed the fixture store, create the broadcast channel
//! 3. Build the schema and router
//! 4. Serve `/health` and `/graphql` (GraphiQL on GET, queries on POST,
//!    subscriptions via WebSocket upgrade on GET)
//!
//! All schema and resolver logic lives in the graphql crate; this crate only
//! owns transport, shared state, and process lifecycle.

pub mod graphql_routes;
pub mod server;
pub mod state;

pub use {
    server::{AppState, build_app, start_gateway},
    state::GatewayState,
};
