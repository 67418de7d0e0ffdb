#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use quotes_db::{InMemoryQuoteStore, QuoteStore};
use tower::ServiceExt;

use quotes_api::config::ServerConfig;
use quotes_api::router::build_app_router;
use quotes_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(public_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8000".to_string()],
        request_timeout_secs: 30,
        public_dir,
    }
}

/// Build the full application router over `store`, using the same
/// middleware stack as `main.rs`.
pub fn build_test_app(store: Arc<InMemoryQuoteStore>) -> Router {
    build_test_app_with_public(store, PathBuf::from("does-not-exist"))
}

/// Like [`build_test_app`] but serving static files from `public_dir`.
pub fn build_test_app_with_public(store: Arc<InMemoryQuoteStore>, public_dir: PathBuf) -> Router {
    build_test_app_with_config(store, test_config(public_dir))
}

/// Build the router over any store with an explicit configuration.
pub fn build_test_app_with_config(store: Arc<dyn QuoteStore>, config: ServerConfig) -> Router {
    build_app_router(AppState::new(store, config))
}

/// Issue a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a request with a JSON body.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST with a form-encoded body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
