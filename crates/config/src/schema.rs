//! Config schema types (server, graphql endpoint, deployment secrets).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WesterosConfig {
    pub server: ServerConfig,
    pub graphql: GraphqlConfig,
    /// Free-form deployment secrets, passed to resolvers opaquely through
    /// the per-request context. Nothing interprets or enforces them.
    pub secrets: HashMap<String, String>,
}

/// Gateway server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to. Defaults to "127.0.0.1".
    pub bind: String,
    /// Port to listen on. Defaults to 4000.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 4000,
        }
    }
}

/// GraphQL endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphqlConfig {
    /// Serve the GraphiQL IDE on GET /graphql. Defaults to true.
    pub graphiql: bool,
    /// Capacity of the broadcast channel behind subscriptions. A receiver
    /// that lags further behind than this has its stream ended. Defaults
    /// to 64.
    pub event_capacity: usize,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            graphiql: true,
            event_capacity: 64,
        }
    }
}
