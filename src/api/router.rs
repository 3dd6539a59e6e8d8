use axum::{middleware, routing::get, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::paths;
use super::state::AppState;
use super::types::ApiError;
use super::v1;
use crate::domain::DomainError;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

async fn route_not_found() -> ApiError {
    ApiError::not_found("the requested resource could not be found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("the method is not supported for this resource")
}

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    with_middleware(api_routes(state))
}

/// Create the full router with the Prometheus endpoint served at `metrics_path`.
///
/// The metrics route sits behind the same middleware as the API routes.
pub fn create_router_with_metrics(
    state: AppState,
    metrics: PrometheusMetrics,
    metrics_path: &str,
) -> Result<Router, DomainError> {
    paths::check_route_is_free(metrics_path)?;

    Ok(with_middleware(
        api_routes(state).merge(create_metrics_router(metrics, metrics_path)),
    ))
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route(paths::HEALTHCHECK_PATH, get(health::health_check))
        .route(paths::LIVE_PATH, get(health::live_check))
        // Model registry API
        .merge(v1::create_v1_router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

fn with_middleware(router: Router) -> Router {
    router
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;

    use super::super::middleware::REQUEST_ID_HEADER;
    use super::*;
    use crate::api::test_support::{send, send_raw, static_app, static_state};

    fn detached_metrics() -> PrometheusMetrics {
        PrometheusMetrics::new(PrometheusBuilder::new().build_recorder().handle())
    }

    #[tokio::test]
    async fn test_healthcheck() {
        let res = send(static_app(), Method::GET, "/api/v1/healthcheck", None).await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["status"], "available");
    }

    #[tokio::test]
    async fn test_unmatched_route_is_404_envelope() {
        let res = send(static_app(), Method::GET, "/api/v1/unknown", None).await;

        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.body["error"]["code"], "404");
        assert!(res.body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_misspelled_nested_route_is_404() {
        let res = send(
            static_app(),
            Method::GET,
            "/api/v1/model_registry/model-registry/registered_models/1/version",
            None,
        )
        .await;

        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.body["error"]["code"], "404");
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405_envelope() {
        let res = send(
            static_app(),
            Method::DELETE,
            "/api/v1/model_registry/model-registry/registered_models/1",
            None,
        )
        .await;

        assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(res.body["error"]["code"], "405");
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let res = send(static_app(), Method::GET, "/live", None).await;

        assert_eq!(res.status, StatusCode::OK);
        assert!(res.headers.contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_duplicate_query_key_is_400_envelope() {
        let res = send(
            static_app(),
            Method::GET,
            "/api/v1/model_registry/model-registry/registered_models?pageSize=1&pageSize=2",
            None,
        )
        .await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.body["error"]["code"], "400");
        assert!(res.body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("pageSize"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_path_segment_is_400_envelope() {
        let res = send(
            static_app(),
            Method::GET,
            "/api/v1/model_registry/model-registry/registered_models/%FF",
            None,
        )
        .await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.body["error"]["code"], "400");
        assert!(res.body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_metrics_route_gets_request_id() {
        let app = create_router_with_metrics(static_state(), detached_metrics(), "/metrics").unwrap();
        let res = send_raw(app, Method::GET, "/metrics", "").await;

        assert_eq!(res.status, StatusCode::OK);
        assert!(res.headers.contains_key(REQUEST_ID_HEADER));
    }

    #[test]
    fn test_metrics_path_colliding_with_route_rejected() {
        let result = create_router_with_metrics(static_state(), detached_metrics(), "/live");
        assert!(result.is_err());

        let result = create_router_with_metrics(
            static_state(),
            detached_metrics(),
            "/api/v1/model_registry/{model_registry_id}/registered_models",
        );
        assert!(result.is_err());
    }
}
