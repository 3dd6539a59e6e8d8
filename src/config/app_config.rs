use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::observability::MetricsConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API from a browser; empty disables CORS
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Upstream model registries
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Per-request timeout for upstream calls
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Serve built-in sample data instead of calling the registries
    #[serde(default)]
    pub mock: bool,
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<RegistryEndpointConfig>,
}

/// One named registry reachable by the BFF
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryEndpointConfig {
    pub name: String,
    pub base_url: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: String,
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_endpoints() -> Vec<RegistryEndpointConfig> {
    vec![RegistryEndpointConfig {
        name: "model-registry".to_string(),
        base_url: "http://localhost:8080/api/model_registry/v1alpha3".to_string(),
        display_name: Some("Model Registry".to_string()),
        description: String::new(),
    }]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            allowed_origins: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            mock: false,
            endpoints: default_endpoints(),
        }
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
