//! Local stand-in for the telemetry API.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub plugin_version: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    pub requests: Arc<Mutex<Vec<Recorded>>>,
    pub server_ids: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    fn record(&self, method: &Method, uri: &Uri) {
        self.requests.lock().unwrap().push(Recorded {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            plugin_version: None,
            content_type: None,
            body: None,
        });
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn submit(State(api): State<FakeApi>, uri: Uri, headers: HeaderMap, body: String) -> impl IntoResponse {
    let parsed: Option<Value> = serde_json::from_str(&body).ok();
    if let Some(id) = parsed.as_ref().and_then(|v| v["server_id"].as_str()) {
        api.server_ids.lock().unwrap().push(id.to_string());
    }
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
    api.requests.lock().unwrap().push(Recorded {
        method: "POST".to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        plugin_version: header("x-plugin-version"),
        content_type: header("content-type"),
        body: parsed,
    });
    (StatusCode::CREATED, Json(json!({"status": "accepted"})))
}

async fn stats(State(api): State<FakeApi>, method: Method, uri: Uri) -> Json<Value> {
    api.record(&method, &uri);
    Json(json!({"total_events": 42}))
}

async fn servers(State(api): State<FakeApi>, method: Method, uri: Uri) -> Json<Value> {
    api.record(&method, &uri);
    let ids = api.server_ids.lock().unwrap().clone();
    Json(json!({ "servers": ids }))
}

async fn errors(State(api): State<FakeApi>, method: Method, uri: Uri) -> impl IntoResponse {
    api.record(&method, &uri);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

async fn config(State(api): State<FakeApi>, method: Method, uri: Uri) -> impl IntoResponse {
    api.record(&method, &uri);
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"})))
}

async fn fallback(State(api): State<FakeApi>, method: Method, uri: Uri) -> Json<Value> {
    api.record(&method, &uri);
    Json(json!({ "path": uri.path() }))
}

/// Serves the fake API on an ephemeral port. Returns the `/api` base URL.
pub async fn spawn_fake_api() -> (String, FakeApi) {
    let api = FakeApi::default();
    let app = Router::new()
        .route("/api/telemetry", post(submit))
        .route("/api/telemetry/stats", get(stats))
        .route("/api/telemetry/servers", get(servers))
        .route("/api/telemetry/errors", get(errors))
        .route("/api/telemetry/config", get(config))
        .fallback(fallback)
        .with_state(api.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api", addr), api)
}

/// A base URL nothing listens on.
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

pub fn output_of(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("report output should be utf-8")
}
