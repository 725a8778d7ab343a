//! GraphQL context types: the schema-wide resolver context and the opaque
//! per-request context built by the transport layer.

use std::{collections::HashMap, sync::Arc};

use {serde_json::Value, tokio::sync::broadcast, westeros_store::FixtureStore};

/// Context injected into every GraphQL resolver via `Context::data()`.
///
/// Holds the broadcast sender so resolvers can publish and subscribe to
/// real-time events, plus the fixture store that queries and projections
/// read. Both are shared for the process lifetime.
pub struct GqlContext {
    /// Broadcast channel for subscription events.
    /// Each event is `(event_name, payload)`.
    pub broadcast_tx: broadcast::Sender<(String, Value)>,

    /// The process-wide fixture data. Immutable after construction, so
    /// concurrent resolver invocations only ever read.
    pub store: Arc<FixtureStore>,
}

impl GqlContext {
    /// Subscribe to broadcast events.
    pub fn subscribe(&self) -> broadcast::Receiver<(String, Value)> {
        self.broadcast_tx.subscribe()
    }

    /// Publish an event to every currently-registered listener and return
    /// how many were reached. Publishing with no listeners is a silent
    /// no-op; nothing is buffered for receivers that register later.
    pub fn publish(&self, event_name: &str, payload: Value) -> usize {
        self.broadcast_tx
            .send((event_name.to_string(), payload))
            .unwrap_or(0)
    }
}

/// Opaque per-request context: transport headers plus deployment secrets.
///
/// The gateway builds one of these per HTTP request (and per WebSocket
/// connection) and attaches it to the executed request. Resolvers receive
/// it unchanged; none consume it today. It exists so auth-style concerns
/// have a place to land without the demo enforcing any.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    headers: HashMap<String, String>,
    secrets: HashMap<String, String>,
}

impl RequestContext {
    /// Header names are lowercased on the way in; values are kept verbatim.
    pub fn new(headers: HashMap<String, String>, secrets: HashMap<String, String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self { headers, secrets }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn secret(&self, name: &str) -> Option<&str> {
        self.secrets.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let ctx = RequestContext::new(map(&[("X-Request-Id", "abc")]), HashMap::new());
        assert_eq!(ctx.header("x-request-id"), Some("abc"));
        assert_eq!(ctx.header("X-REQUEST-ID"), Some("abc"));
        assert_eq!(ctx.header("x-other"), None);
    }

    #[test]
    fn secrets_pass_through_untouched() {
        let ctx = RequestContext::new(HashMap::new(), map(&[("api_key", "s3cret")]));
        assert_eq!(ctx.secret("api_key"), Some("s3cret"));
        assert_eq!(ctx.secret("API_KEY"), None);
    }
}
