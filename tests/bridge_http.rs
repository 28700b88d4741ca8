//! Integration tests for the local HTTP bridge.
//!
//! Spins up the bridge on an ephemeral loopback port, backed by a mock DoH
//! resolver, and drives it the way a browser-side consumer would.

mod helpers;

use helpers::*;
use netbar::bridge::{serve_bridge, BridgeState, HealthResponse};
use netbar::MessageResponse;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use wiremock::MockServer;

struct Bridge {
    base: String,
    http: reqwest::Client,
    _shutdown: oneshot::Sender<()>,
}

async fn start_bridge(upstream: &MockServer) -> Bridge {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let (tx, rx) = oneshot::channel::<()>();

    let state = BridgeState::new(test_netbar(upstream));
    tokio::spawn(async move {
        let shutdown = async {
            let _ = rx.await;
        };
        if let Err(e) = serve_bridge(listener, state, shutdown).await {
            eprintln!("bridge stopped: {e}");
        }
    });

    Bridge {
        base: format!("http://{addr}"),
        http: reqwest::Client::new(),
        _shutdown: tx,
    }
}

async fn mount_zone(upstream: &MockServer) {
    mount_dns(upstream, "www.example.com", "A", &["93.184.216.34"]).await;
    mount_dns(upstream, "example.com", "NS", &["a.iana-servers.net."]).await;
    mount_dns_empty_fallback(upstream).await;
    mount_primary(upstream, "203.0.113.7", "Netherlands").await;
}

impl Bridge {
    async fn message(&self, body: serde_json::Value) -> (u16, MessageResponse) {
        let response = self
            .http
            .post(format!("{}/message", self.base))
            .json(&body)
            .send()
            .await
            .expect("POST /message failed");
        let status = response.status().as_u16();
        (status, response.json().await.expect("Invalid message response"))
    }

    async fn health(&self) -> HealthResponse {
        self.http
            .get(format!("{}/health", self.base))
            .send()
            .await
            .expect("GET /health failed")
            .json()
            .await
            .expect("Invalid health response")
    }
}

#[tokio::test]
async fn test_message_lookup_over_http() {
    let upstream = MockServer::start().await;
    mount_zone(&upstream).await;
    let bridge = start_bridge(&upstream).await;

    let (status, response) = bridge
        .message(json!({"type": "NETBAR_GET", "url": "https://www.example.com/", "tabId": 3}))
        .await;
    assert_eq!(status, 200);
    assert!(response.ok);
    let result = response.result.expect("result present");
    assert_eq!(result.domain, "www.example.com");
    assert_eq!(result.ip.as_deref(), Some("93.184.216.34"));
    assert_eq!(result.ns, vec!["a.iana-servers.net".to_string()]);
    assert_eq!(result.ns_domain.as_deref(), Some("example.com"));
    assert_eq!(result.server.as_deref(), Some("-"));
    assert_eq!(result.my_country.as_deref(), Some("Netherlands"));
}

#[tokio::test]
async fn test_tab_lifecycle_feeds_server_header() {
    let upstream = MockServer::start().await;
    mount_zone(&upstream).await;
    let bridge = start_bridge(&upstream).await;

    let status = bridge
        .http
        .post(format!("{}/tabs/7/response", bridge.base))
        .json(&json!({
            "type": "main_frame",
            "headers": [
                {"name": "content-type", "value": "text/html"},
                {"name": "server", "value": "ECS (dcb/7EA3)"}
            ]
        }))
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 204);

    // Subresources never overwrite the page's server
    bridge
        .http
        .post(format!("{}/tabs/7/response", bridge.base))
        .json(&json!({"type": "image", "headers": [{"name": "Server", "value": "cdn"}]}))
        .send()
        .await
        .unwrap();
    assert_eq!(bridge.health().await.tabs, 1);

    let request = json!({"type": "NETBAR_GET", "url": "https://www.example.com/", "tabId": 7});
    let (_, response) = bridge.message(request.clone()).await;
    assert_eq!(
        response.result.unwrap().server.as_deref(),
        Some("ECS (dcb/7EA3)")
    );

    let status = bridge
        .http
        .delete(format!("{}/tabs/7", bridge.base))
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 204);
    assert_eq!(bridge.health().await.tabs, 0);

    let (_, response) = bridge.message(request).await;
    assert_eq!(response.result.unwrap().server.as_deref(), Some("-"));
}

#[tokio::test]
async fn test_contract_failures_answer_ok_status() {
    let upstream = MockServer::start().await;
    mount_zone(&upstream).await;
    let bridge = start_bridge(&upstream).await;

    let (status, response) = bridge.message(json!({"type": "NETBAR_PING"})).await;
    assert_eq!(status, 200);
    assert_eq!(response, MessageResponse::failure("Unknown message"));

    let (status, response) = bridge
        .message(json!({"type": "NETBAR_GET", "url": "about:blank"}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(response, MessageResponse::failure("No domain"));
}

#[tokio::test]
async fn test_malformed_message_is_rejected() {
    let upstream = MockServer::start().await;
    let bridge = start_bridge(&upstream).await;

    let response = bridge
        .http
        .post(format!("{}/message", bridge.base))
        .header("content-type", "application/json")
        .body("{\"url\": 12")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: MessageResponse = response.json().await.unwrap();
    assert!(!body.ok);
    assert!(body.error.is_some());
}

#[tokio::test]
async fn test_health_reports_ok() {
    let upstream = MockServer::start().await;
    let bridge = start_bridge(&upstream).await;

    let health = bridge.health().await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.tabs, 0);
}
