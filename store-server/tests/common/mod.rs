#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use store_server::{Config, ServerState, build_app};
use tower::ServiceExt;

/// Application over a fresh in-memory database with relative links
pub async fn app() -> Router {
    app_with_base("").await
}

/// Application whose links are prefixed with `base`
pub async fn app_with_base(base: &str) -> Router {
    let mut config = Config::with_overrides("sqlite::memory:", 0);
    config.public_base_url = base.to_string();
    let state = ServerState::initialize(&config).await.unwrap();
    build_app(state)
}

pub async fn request(app: &Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

/// Send a request and decode the JSON answer (`Null` for empty bodies)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = request(app, method, uri, body.map(|b| b.to_string())).await;
    decode(response).await
}

/// Send a raw, possibly malformed, JSON body
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = request(app, method, uri, Some(body.to_string())).await;
    decode(response).await
}

async fn decode(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn create_client(app: &Router, name: &str) -> Value {
    let body = serde_json::json!({
        "name": name,
        "login": name.to_lowercase(),
        "email": format!("{}@example.com", name.to_lowercase()),
    });
    let (status, json) = send(app, Method::POST, "/clients", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    json
}

pub async fn create_product(app: &Router, name: &str, value: Value) -> Value {
    let body = serde_json::json!({ "name": name, "value": value });
    let (status, json) = send(app, Method::POST, "/products", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    json
}

/// Assert the structured error body and return its message
pub fn assert_error_body(json: &Value, status: StatusCode) -> String {
    assert_eq!(json["status"], status.as_u16());
    assert_eq!(json["error"], status.canonical_reason().unwrap());
    assert!(json["timestamp"].is_string());
    assert!(json["code"].is_u64());
    json["message"].as_str().unwrap().to_string()
}
