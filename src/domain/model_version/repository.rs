//! Model version repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{ModelVersion, ModelVersionUpdate};
use crate::domain::error::DomainError;

/// Access to model versions in one upstream registry
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelVersionRepository: Send + Sync {
    /// Fetches a model version by ID
    async fn get(&self, id: &str) -> Result<ModelVersion, DomainError>;

    /// Creates a model version; the parent is named in the body
    async fn create(&self, version: &ModelVersion) -> Result<ModelVersion, DomainError>;

    /// Applies a partial update
    async fn update(
        &self,
        id: &str,
        update: &ModelVersionUpdate,
    ) -> Result<ModelVersion, DomainError>;
}
