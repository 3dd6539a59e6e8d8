//! Registered model repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{RegisteredModel, RegisteredModelUpdate};
use crate::domain::error::DomainError;
use crate::domain::list::{ListQuery, ResourceList};
use crate::domain::model_version::ModelVersion;

/// Access to registered models in one upstream registry
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegisteredModelRepository: Send + Sync {
    /// Lists one page of registered models
    async fn list(&self, query: &ListQuery) -> Result<ResourceList<RegisteredModel>, DomainError>;

    /// Fetches a registered model by ID
    async fn get(&self, id: &str) -> Result<RegisteredModel, DomainError>;

    /// Creates a registered model; the registry assigns the ID
    async fn create(&self, model: &RegisteredModel) -> Result<RegisteredModel, DomainError>;

    /// Applies a partial update
    async fn update(
        &self,
        id: &str,
        update: &RegisteredModelUpdate,
    ) -> Result<RegisteredModel, DomainError>;

    /// Lists versions under a registered model
    async fn list_versions(
        &self,
        id: &str,
        query: &ListQuery,
    ) -> Result<ResourceList<ModelVersion>, DomainError>;

    /// Creates a version under a registered model
    async fn create_version(
        &self,
        id: &str,
        version: &ModelVersion,
    ) -> Result<ModelVersion, DomainError>;
}
