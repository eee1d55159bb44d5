use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use fieldboard_api::config::ServerConfig;
use fieldboard_api::router::build_app_router;
use fieldboard_api::state::AppState;
use fieldboard_registry::{FieldStore, InMemoryRegistry};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the wildcard CORS origin (matching the production default) and a
/// 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, backed by
/// a fresh, empty in-memory registry.
///
/// This goes through the same `build_app_router` that production uses, so
/// integration tests exercise the identical middleware stack (CORS, request
/// ID, timeout, tracing, panic recovery).
pub fn build_test_app() -> Router {
    let config = test_config();
    let registry: Arc<dyn FieldStore> = Arc::new(InMemoryRegistry::new());

    let state = AppState {
        registry,
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
