use std::{collections::HashMap, sync::Arc, time::Instant};

use {
    serde_json::Value, tokio::sync::broadcast, westeros_config::WesterosConfig,
    westeros_store::FixtureStore,
};

// ── Gateway state ────────────────────────────────────────────────────────────

/// Shared gateway runtime state, wrapped in Arc for use across async tasks.
pub struct GatewayState {
    /// Broadcast channel behind subscriptions. Created exactly once per
    /// process; the sending half also lives inside the schema context.
    /// Each event is `(event_name, payload)`.
    pub broadcast_tx: broadcast::Sender<(String, Value)>,
    /// The fixture data every resolver reads.
    pub store: Arc<FixtureStore>,
    /// Deployment secrets from config, attached opaquely to every request
    /// context.
    pub secrets: HashMap<String, String>,
    /// Whether GET /graphql serves the GraphiQL IDE.
    pub graphiql: bool,
    /// Server version string.
    pub version: String,
    started_at: Instant,
}

impl GatewayState {
    pub fn new(config: &WesterosConfig) -> Arc<Self> {
        // broadcast::channel panics on zero capacity.
        let capacity = config.graphql.event_capacity.max(1);
        let (broadcast_tx, _) = broadcast::channel(capacity);
        Arc::new(Self {
            broadcast_tx,
            store: Arc::new(FixtureStore::new()),
            secrets: config.secrets.clone(),
            graphiql: config.graphql.graphiql,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Instant::now(),
        })
    }

    pub fn uptime_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }
}
