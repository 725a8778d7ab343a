use std::sync::Arc;

use {
    axum::{
        Router,
        extract::State,
        response::{IntoResponse, Json},
        routing::get,
    },
    tower_http::{
        cors::{Any, CorsLayer},
        trace::TraceLayer,
    },
    tracing::info,
    westeros_config::WesterosConfig,
    westeros_graphql::{WesterosSchema, build_schema},
};

use crate::{
    graphql_routes::{graphql_get_handler, graphql_handler},
    state::GatewayState,
};

// ── Shared app state ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayState>,
    pub graphql_schema: WesterosSchema,
}

// ── Server startup ───────────────────────────────────────────────────────────

/// Build the gateway router (shared between production startup and tests).
pub fn build_app(state: Arc<GatewayState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let graphql_schema = build_schema(Arc::clone(&state.store), state.broadcast_tx.clone());

    let app_state = AppState {
        gateway: state,
        graphql_schema,
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/graphql", get(graphql_get_handler).post(graphql_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the gateway HTTP server and block until it exits.
pub async fn start_gateway(config: &WesterosConfig) -> anyhow::Result<()> {
    let state = GatewayState::new(config);
    let app = build_app(state);

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "gateway listening");
    axum::serve(listener, app).await?;
    Ok(())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": state.gateway.version,
        "uptime_ms": state.gateway.uptime_ms(),
    }))
}
