//! Observability infrastructure - Metrics

mod config;
mod metrics;

pub use config::MetricsConfig;
pub use metrics::{
    create_metrics_router, init_metrics, record_http_request, record_upstream_request,
    PrometheusMetrics, UpstreamOutcome, UNMATCHED_ROUTE,
};
