//! Serve command - runs the API server

use std::net::SocketAddr;

use axum::Router;
use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::{create_router, create_router_with_metrics};
use crate::api::middleware::cors_layer;
use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::observability::init_metrics;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on, overriding the configured one
    #[arg(long)]
    pub port: Option<u16>,

    /// Serve built-in sample data instead of calling the registries
    #[arg(long)]
    pub mock_registry: bool,
}

impl ServeArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }

        if self.mock_registry {
            config.registry.mock = true;
        }
    }
}

/// Run the API server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    args.apply(&mut config);
    logging::init_logging(&config.logging);

    let app = build_app(&config)?;

    let addr = build_socket_addr(&config)?;
    info!(mock = config.registry.mock, "Starting model registry BFF on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let state = crate::create_app_state_with_config(config)?;

    let mut router = match init_metrics(&config.metrics) {
        Some(metrics) => create_router_with_metrics(state, metrics, &config.metrics.path)?,
        None => create_router(state),
    };

    if let Some(cors) = cors_layer(&config.server.allowed_origins)? {
        router = router.layer(cors);
    }

    Ok(router)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let mut config = AppConfig::default();
        let args = ServeArgs {
            port: Some(4100),
            mock_registry: true,
        };

        args.apply(&mut config);

        assert_eq!(config.server.port, 4100);
        assert!(config.registry.mock);
    }

    #[test]
    fn test_socket_addr_from_config() {
        let config = AppConfig::default();
        let addr = build_socket_addr(&config).unwrap();

        assert_eq!(addr.port(), 4000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_invalid_host_rejected() {
        let mut config = AppConfig::default();
        config.server.host = "not-an-ip".to_string();

        assert!(build_socket_addr(&config).is_err());
    }
}
