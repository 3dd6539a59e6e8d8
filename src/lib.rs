//! Model Registry BFF
//!
//! HTTP API sitting between the model registry UI and one or more upstream
//! model registries. Requests are proxied to the registry named in the path
//! and answered in `{"data": ...}` / `{"error": ...}` envelopes.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::registry::StaticRegistryResolver;

/// Build application state from configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let resolver = StaticRegistryResolver::from_config(&config.registry)?;

    tracing::info!(
        registries = config.registry.endpoints.len(),
        mock = config.registry.mock,
        "Model registries configured"
    );

    Ok(AppState::new(Arc::new(resolver)))
}
