//! GraphQL HTTP handlers for the gateway.
//!
//! These handlers bridge `AppState` to the `westeros-graphql` schema,
//! providing GraphiQL on GET `/graphql`, query/mutation execution on POST
//! `/graphql`, and WebSocket subscriptions on GET `/graphql`. Every request
//! (and every WebSocket connection) gets an opaque [`RequestContext`] built
//! from its transport headers plus the configured deployment secrets.

use {
    async_graphql::http::GraphiQLSource,
    axum::{
        Json,
        extract::{FromRequestParts, Request, State, WebSocketUpgrade},
        http::{HeaderMap, StatusCode, header},
        response::{Html, IntoResponse, Response},
    },
    westeros_graphql::context::RequestContext,
};

use crate::server::AppState;

/// Handle GET `/graphql`:
///
/// - Standard HTTP GET: returns GraphiQL (when enabled).
/// - WebSocket upgrade GET: upgrades to GraphQL subscriptions.
pub async fn graphql_get_handler(State(state): State<AppState>, req: Request) -> impl IntoResponse {
    let (mut parts, _body) = req.into_parts();

    if is_websocket_upgrade_request(&parts.headers) {
        let request_ctx = request_context(&parts.headers, &state);

        let protocol =
            match async_graphql_axum::GraphQLProtocol::from_request_parts(&mut parts, &()).await {
                Ok(protocol) => protocol,
                Err(status) => return status.into_response(),
            };

        let ws = match WebSocketUpgrade::from_request_parts(&mut parts, &()).await {
            Ok(ws) => ws,
            Err(rejection) => return rejection.into_response(),
        };

        return graphql_ws_response(&state, protocol, ws, request_ctx);
    }

    if state.gateway.graphiql {
        return graphiql_response();
    }

    graphiql_disabled_response()
}

/// Handle GraphQL queries and mutations.
pub async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: async_graphql_axum::GraphQLRequest,
) -> impl IntoResponse {
    let request_ctx = request_context(&headers, &state);
    async_graphql_axum::GraphQLResponse::from(
        state
            .graphql_schema
            .execute(req.into_inner().data(request_ctx))
            .await,
    )
    .into_response()
}

/// Build the opaque per-request context from transport headers and the
/// configured deployment secrets. Header values that are not valid UTF-8
/// are dropped.
fn request_context(headers: &HeaderMap, state: &AppState) -> RequestContext {
    let headers = headers
        .iter()
        .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
        .collect();
    RequestContext::new(headers, state.gateway.secrets.clone())
}

fn graphql_ws_response(
    state: &AppState,
    protocol: async_graphql_axum::GraphQLProtocol,
    ws: WebSocketUpgrade,
    request_ctx: RequestContext,
) -> Response {
    let schema = state.graphql_schema.clone();
    ws.protocols(["graphql-transport-ws", "graphql-ws"])
        .on_upgrade(move |socket| {
            let mut data = async_graphql::Data::default();
            data.insert(request_ctx);
            let resp =
                async_graphql_axum::GraphQLWebSocket::new(socket, schema, protocol).with_data(data);
            async move {
                resp.serve().await;
            }
        })
        .into_response()
}

fn graphiql_response() -> Response {
    Html(
        GraphiQLSource::build()
            .endpoint("/graphql")
            .subscription_endpoint("/graphql")
            .finish(),
    )
    .into_response()
}

fn graphiql_disabled_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "graphiql is disabled" })),
    )
        .into_response()
}

fn is_websocket_upgrade_request(headers: &HeaderMap) -> bool {
    // A proper WS upgrade has Connection: Upgrade AND Upgrade: websocket,
    // but we also accept the presence of Sec-WebSocket-Key as a fallback
    // since some clients (e.g. graphql-ws) may omit the Connection header.
    let has_upgrade_header = headers
        .get(header::UPGRADE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            v.split(',')
                .any(|t| t.trim().eq_ignore_ascii_case("websocket"))
        })
        .unwrap_or(false);

    has_upgrade_header || headers.contains_key(header::SEC_WEBSOCKET_KEY)
}
