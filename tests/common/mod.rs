//! Common test utilities for integration tests
//!
//! Provides a wiremock-backed upstream and helpers for driving the search
//! router in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use message_search::application::CachedUpstream;
use message_search::domain::models::{Config, SearchConfig, ServerConfig, UpstreamConfig};
use message_search::{CachedMessageSource, HttpMessageSource, SearchHttpServer, SearchService};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock upstream serves messages on
pub const MESSAGES_PATH: &str = "/messages";

/// Upstream body from the canonical greeting scenario
pub fn greeting_payload() -> Value {
    serde_json::json!({
        "items": [
            {"id": "1", "user_name": "Ana", "message": "hello world"},
            {"id": "2", "user_name": "Ben", "message": "goodbye"},
            {"id": "3", "user_name": "Cy", "message": "Hello again"}
        ]
    })
}

/// Upstream body with `count` numbered messages
#[allow(dead_code)]
pub fn numbered_payload(count: usize) -> Value {
    let items: Vec<Value> = (1..=count)
        .map(|i| serde_json::json!({ "id": i.to_string(), "message": format!("message {i}") }))
        .collect();
    serde_json::json!({ "items": items, "total": count })
}

/// Start a mock upstream answering GET /messages with `body`
pub async fn upstream_with(body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Upstream config pointing at a mock server
#[allow(dead_code)]
pub fn upstream_config(server: &MockServer) -> UpstreamConfig {
    UpstreamConfig {
        url: format!("{}{}", server.uri(), MESSAGES_PATH),
        timeout_secs: 10,
        max_redirects: 10,
    }
}

/// Search service over a cached client for `server`
#[allow(dead_code)]
pub fn search_service_for(server: &MockServer, ttl: Duration) -> SearchService<CachedUpstream> {
    let upstream = HttpMessageSource::new(&upstream_config(server)).expect("client should build");
    let cached = CachedMessageSource::with_ttl(Arc::new(upstream), ttl);
    SearchService::new(Arc::new(cached), SearchConfig::default())
}

/// Build the full router (cached upstream client + search service) over `server`
#[allow(dead_code)]
pub fn router_for(server: &MockServer, ttl: Duration) -> Router {
    SearchHttpServer::new(search_service_for(server, ttl), Config::default().server).build_router()
}

/// Same as [`router_for`] with CORS configurable
#[allow(dead_code)]
pub fn router_with_server_config(server: &MockServer, server_config: ServerConfig) -> Router {
    let upstream = HttpMessageSource::new(&upstream_config(server)).expect("client should build");
    let cached = CachedMessageSource::new(Arc::new(upstream));
    let service = SearchService::new(Arc::new(cached), SearchConfig::default());

    SearchHttpServer::new(service, server_config).build_router()
}

/// Send a GET through the router and return status plus JSON body
#[allow(dead_code)]
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
