//! Upstream registry abstractions

mod client;
mod path;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use client::RegistryClient;
pub use path::UpstreamPath;

use super::model_version::ModelVersionRepository;
use super::registered_model::RegisteredModelRepository;
use super::DomainError;

/// Public description of a configured registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRegistryDescriptor {
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Repositories bound to a single upstream registry
#[derive(Clone)]
pub struct ModelRegistry {
    pub descriptor: ModelRegistryDescriptor,
    pub registered_models: Arc<dyn RegisteredModelRepository>,
    pub model_versions: Arc<dyn ModelVersionRepository>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Maps the registry name in a request path to its repositories
pub trait RegistryResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Result<ModelRegistry, DomainError>;

    fn list(&self) -> Vec<ModelRegistryDescriptor>;
}
