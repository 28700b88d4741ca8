// Shared test helpers: a mock server standing in for the DoH resolver and
// both public IP providers.

#![allow(dead_code)] // Not every test file uses every helper

use netbar::{Config, NetBar};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PRIMARY_PATH: &str = "/primary/json/";
pub const SECONDARY_PATH: &str = "/secondary";

/// Config pointing every endpoint at `server`.
pub fn test_config(server: &MockServer) -> Config {
    Config {
        doh_endpoint: format!("{}/dns-query", server.uri()),
        my_ip_primary: format!("{}{}", server.uri(), PRIMARY_PATH),
        my_ip_secondary: format!("{}{}?format=json", server.uri(), SECONDARY_PATH),
        timeout_seconds: 5,
        user_agent: "netbar_test/1.0".to_string(),
        ..Default::default()
    }
}

pub fn test_netbar(server: &MockServer) -> NetBar {
    NetBar::from_config(&test_config(server)).expect("Failed to build test context")
}

/// Answers `name`/`record_type` with the given data strings.
pub async fn mount_dns(server: &MockServer, name: &str, record_type: &str, data: &[&str]) {
    let answer: Vec<_> = data.iter().map(|d| json!({ "data": d })).collect();
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("name", name))
        .and(query_param("type", record_type))
        .and(header("accept", "application/dns-json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": 0,
            "Answer": answer
        })))
        .mount(server)
        .await;
}

/// Fails `name`/`record_type` with the given HTTP status.
pub async fn mount_dns_status(server: &MockServer, name: &str, record_type: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("name", name))
        .and(query_param("type", record_type))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Answers every DoH query nobody else matched with an empty answer section.
pub async fn mount_dns_empty_fallback(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Status": 0 })))
        .with_priority(10)
        .mount(server)
        .await;
}

/// Primary provider answering with `ip` and `country_name`.
pub async fn mount_primary(server: &MockServer, ip: &str, country_name: &str) {
    Mock::given(method("GET"))
        .and(path(PRIMARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": ip,
            "country": "NL",
            "country_name": country_name
        })))
        .mount(server)
        .await;
}

/// Number of requests received on `request_path`.
pub async fn request_count(server: &MockServer, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|req| req.url.path() == request_path)
        .count()
}
