//! API middleware components

pub mod cors;
pub mod logging;
pub mod metrics;

pub use cors::cors_layer;
pub use logging::{logging_middleware, REQUEST_ID_HEADER};
pub use metrics::metrics_middleware;
