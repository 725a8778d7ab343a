#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the GraphQL endpoint over HTTP and WebSocket.

use std::net::SocketAddr;

use {
    futures::{SinkExt, StreamExt},
    tokio::{
        net::TcpListener,
        time::{Duration, timeout},
    },
    tokio_tungstenite::{
        connect_async,
        tungstenite::{Message, client::IntoClientRequest, http::HeaderValue},
    },
};

use {
    westeros_config::WesterosConfig,
    westeros_gateway::{GatewayState, build_app},
};

/// Spin up a test gateway on an ephemeral port, return the bound address.
async fn start_test_server(config: WesterosConfig) -> SocketAddr {
    let state = GatewayState::new(&config);
    let app = build_app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn post_graphql(addr: SocketAddr, query: &str) -> serde_json::Value {
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/graphql"))
        .json(&serde_json::json!({ "query": query }))
        .send()
        .await
        .expect("graphql request failed");
    assert_eq!(resp.status(), 200);
    resp.json().await.expect("graphql response was not json")
}

// ── HTTP surface ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_endpoint_returns_json() {
    let addr = start_test_server(WesterosConfig::default()).await;
    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert!(json["uptime_ms"].is_number());
}

#[tokio::test]
async fn get_graphql_serves_graphiql() {
    let addr = start_test_server(WesterosConfig::default()).await;
    let resp = reqwest::get(format!("http://{addr}/graphql")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("GraphiQL"));
    assert!(body.contains("/graphql"));
}

#[tokio::test]
async fn get_graphql_is_404_when_graphiql_disabled() {
    let mut config = WesterosConfig::default();
    config.graphql.graphiql = false;
    let addr = start_test_server(config).await;

    let resp = reqwest::get(format!("http://{addr}/graphql")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "graphiql is disabled");
}

#[tokio::test]
async fn post_graphql_resolves_users_and_friends() {
    let addr = start_test_server(WesterosConfig::default()).await;
    let json = post_graphql(
        addr,
        r#"{ users(id: [1, 4]) { first_name last_name friends { first_name } } }"#,
    )
    .await;

    assert!(json["errors"].is_null(), "errors: {json}");
    let users = json["data"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["first_name"], "Tywin");
    assert_eq!(users[1]["first_name"], "Tyrion");
    let friends = users[0]["friends"].as_array().unwrap();
    let names: Vec<_> = friends.iter().map(|f| f["first_name"].clone()).collect();
    assert_eq!(names, vec!["Cersei", "Jaime"]);
}

#[tokio::test]
async fn post_graphql_kill_returns_farewell() {
    let addr = start_test_server(WesterosConfig::default()).await;
    let json = post_graphql(addr, r#"mutation { kill(user_id: 4) }"#).await;

    assert!(json["errors"].is_null(), "errors: {json}");
    assert_eq!(
        json["data"]["kill"],
        "Tyrion Lannister has been killed. We wish you fortune in the wars to come."
    );
}

#[tokio::test]
async fn post_graphql_kill_unknown_id_is_an_error() {
    let addr = start_test_server(WesterosConfig::default()).await;
    let json = post_graphql(addr, r#"mutation { kill(user_id: 99) }"#).await;

    assert_eq!(json["errors"][0]["message"], "no user with id 99");
}

// ── WebSocket subscriptions ──────────────────────────────────────────────────

#[tokio::test]
async fn subscription_over_websocket_receives_kill_event() {
    let addr = start_test_server(WesterosConfig::default()).await;

    let mut request = format!("ws://{addr}/graphql")
        .into_client_request()
        .unwrap();
    request.headers_mut().insert(
        "Sec-WebSocket-Protocol",
        HeaderValue::from_static("graphql-transport-ws"),
    );
    let (mut ws, _) = connect_async(request).await.expect("ws connect failed");

    // graphql-transport-ws handshake.
    let init = serde_json::json!({ "type": "connection_init", "payload": {} });
    ws.send(Message::Text(init.to_string().into()))
        .await
        .unwrap();

    let msg = timeout(Duration::from_secs(2), ws.next())
        .await
        .expect("timed out waiting for connection_ack")
        .unwrap()
        .unwrap();
    let frame: serde_json::Value = serde_json::from_str(msg.to_text().unwrap()).unwrap();
    assert_eq!(frame["type"], "connection_ack");

    // Watch for Tyrion's death.
    let subscribe = serde_json::json!({
        "id": "sub-1",
        "type": "subscribe",
        "payload": {
            "query": "subscription { characterKilled(user_id: 4) { user_id } }"
        }
    });
    ws.send(Message::Text(subscribe.to_string().into()))
        .await
        .unwrap();

    // Let the server start the subscription stream before firing the kill.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let json = post_graphql(addr, r#"mutation { kill(user_id: 4) }"#).await;
    assert!(json["errors"].is_null(), "kill failed: {json}");

    // The event arrives as a `next` frame on the socket.
    let mut delivered = None;
    for _ in 0..5 {
        let msg = timeout(Duration::from_secs(2), ws.next())
            .await
            .expect("timed out waiting for subscription event")
            .unwrap()
            .unwrap();
        let Ok(text) = msg.to_text() else { continue };
        let frame: serde_json::Value = serde_json::from_str(text).unwrap();
        if frame["type"] == "next" {
            delivered = Some(frame);
            break;
        }
    }
    let frame = delivered.expect("no next frame received");
    assert_eq!(frame["id"], "sub-1");
    assert_eq!(frame["payload"]["data"]["characterKilled"]["user_id"], 4);

    ws.close(None).await.ok();
}

#[tokio::test]
async fn subscription_ignores_kills_of_other_users() {
    let addr = start_test_server(WesterosConfig::default()).await;

    let mut request = format!("ws://{addr}/graphql")
        .into_client_request()
        .unwrap();
    request.headers_mut().insert(
        "Sec-WebSocket-Protocol",
        HeaderValue::from_static("graphql-transport-ws"),
    );
    let (mut ws, _) = connect_async(request).await.expect("ws connect failed");

    let init = serde_json::json!({ "type": "connection_init", "payload": {} });
    ws.send(Message::Text(init.to_string().into()))
        .await
        .unwrap();
    let _ack = timeout(Duration::from_secs(2), ws.next())
        .await
        .expect("timed out waiting for connection_ack")
        .unwrap()
        .unwrap();

    // Subscribe to Jaime (3), then kill Tywin (1); nothing should arrive.
    let subscribe = serde_json::json!({
        "id": "sub-2",
        "type": "subscribe",
        "payload": {
            "query": "subscription { characterKilled(user_id: 3) { user_id } }"
        }
    });
    ws.send(Message::Text(subscribe.to_string().into()))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let json = post_graphql(addr, r#"mutation { kill(user_id: 1) }"#).await;
    assert!(json["errors"].is_null(), "kill failed: {json}");

    let quiet = timeout(Duration::from_millis(300), ws.next()).await;
    assert!(quiet.is_err(), "unexpected frame: {quiet:?}");

    ws.close(None).await.ok();
}
