//! Helpers for driving the router in tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use super::router::create_router;
use super::state::AppState;
use crate::domain::{
    ModelRegistry, ModelRegistryDescriptor, ModelVersionRepository, RegisteredModelRepository,
};
use crate::infrastructure::registry::{StaticRegistryClient, StaticRegistryResolver};

pub const REGISTRY: &str = "model-registry";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(axum::http::header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

pub fn descriptor() -> ModelRegistryDescriptor {
    ModelRegistryDescriptor {
        name: REGISTRY.to_string(),
        display_name: "Model Registry".to_string(),
        description: String::new(),
    }
}

/// State serving the built-in fixtures under [`REGISTRY`]
pub fn static_state() -> AppState {
    let resolver = StaticRegistryResolver::new()
        .with_client(descriptor(), Arc::new(StaticRegistryClient::new()));

    AppState::new(Arc::new(resolver))
}

/// Router serving the built-in fixtures under [`REGISTRY`]
pub fn static_app() -> Router {
    create_router(static_state())
}

/// Router whose only registry uses the given repositories
pub fn app_with(
    registered_models: impl RegisteredModelRepository + 'static,
    model_versions: impl ModelVersionRepository + 'static,
) -> Router {
    let resolver = StaticRegistryResolver::new().with_registry(ModelRegistry {
        descriptor: descriptor(),
        registered_models: Arc::new(registered_models),
        model_versions: Arc::new(model_versions),
    });

    create_router(AppState::new(Arc::new(resolver)))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let body = match body {
        Some(json) => Body::from(serde_json::to_vec(&json).unwrap()),
        None => Body::empty(),
    };

    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn send_raw(app: Router, method: Method, uri: &str, body: &'static str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    }
}
