//! Schema construction and type alias.

use std::sync::Arc;

use {
    async_graphql::Schema, serde_json::Value, tokio::sync::broadcast,
    westeros_store::FixtureStore,
};

use crate::{
    context::GqlContext, mutations::MutationRoot, queries::QueryRoot,
    subscriptions::SubscriptionRoot,
};

/// The full westeros GraphQL schema type.
pub type WesterosSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// Build the GraphQL schema over a fixture store and a broadcast channel.
///
/// The `broadcast_tx` is a `tokio::sync::broadcast::Sender` carrying
/// `(event_name, payload)` tuples; the `kill` mutation publishes on it and
/// the `characterKilled` subscription listens. The caller creates the
/// channel exactly once (the gateway at startup, or a test per schema) and
/// this function shares it with every resolver.
pub fn build_schema(
    store: Arc<FixtureStore>,
    broadcast_tx: broadcast::Sender<(String, Value)>,
) -> WesterosSchema {
    let ctx = Arc::new(GqlContext {
        broadcast_tx,
        store,
    });

    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(ctx)
        .finish()
}
