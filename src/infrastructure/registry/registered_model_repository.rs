//! Registered model repository backed by a registry client

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::codec::{decode, encode};
use crate::domain::{
    DomainError, ListQuery, ModelVersion, RegisteredModel, RegisteredModelRepository,
    RegisteredModelUpdate, RegistryClient, ResourceList, UpstreamPath,
};

pub const REGISTERED_MODELS_PATH: &str = "/registered_models";
const VERSIONS_SEGMENT: &str = "versions";

#[derive(Debug, Clone)]
pub struct UpstreamRegisteredModelRepository {
    client: Arc<dyn RegistryClient>,
}

impl UpstreamRegisteredModelRepository {
    pub fn new(client: Arc<dyn RegistryClient>) -> Self {
        Self { client }
    }

    fn collection_path() -> UpstreamPath {
        UpstreamPath::new(REGISTERED_MODELS_PATH)
    }

    fn model_path(id: &str) -> UpstreamPath {
        Self::collection_path().join(id)
    }

    fn versions_path(id: &str) -> UpstreamPath {
        Self::model_path(id).join(VERSIONS_SEGMENT)
    }
}

#[async_trait]
impl RegisteredModelRepository for UpstreamRegisteredModelRepository {
    async fn list(&self, query: &ListQuery) -> Result<ResourceList<RegisteredModel>, DomainError> {
        debug!("Listing registered models");

        let body = self
            .client
            .get(&Self::collection_path(), &query.to_pairs())
            .await
            .map_err(|e| e.context("error fetching registered models"))?;

        decode(&body)
    }

    async fn get(&self, id: &str) -> Result<RegisteredModel, DomainError> {
        debug!(registered_model_id = %id, "Getting registered model");

        let body = self
            .client
            .get(&Self::model_path(id), &[])
            .await
            .map_err(|e| e.context("error fetching registered model"))?;

        decode(&body)
    }

    async fn create(&self, model: &RegisteredModel) -> Result<RegisteredModel, DomainError> {
        debug!(name = %model.name, "Creating registered model");

        let body = self
            .client
            .post(&Self::collection_path(), encode(model)?)
            .await
            .map_err(|e| e.context("error posting registered model"))?;

        decode(&body)
    }

    async fn update(
        &self,
        id: &str,
        update: &RegisteredModelUpdate,
    ) -> Result<RegisteredModel, DomainError> {
        debug!(registered_model_id = %id, "Updating registered model");

        let body = self
            .client
            .patch(&Self::model_path(id), encode(update)?)
            .await
            .map_err(|e| e.context("error patching registered model"))?;

        decode(&body)
    }

    async fn list_versions(
        &self,
        id: &str,
        query: &ListQuery,
    ) -> Result<ResourceList<ModelVersion>, DomainError> {
        debug!(registered_model_id = %id, "Listing model versions for registered model");

        let body = self
            .client
            .get(&Self::versions_path(id), &query.to_pairs())
            .await
            .map_err(|e| e.context("error fetching model versions"))?;

        decode(&body)
    }

    async fn create_version(
        &self,
        id: &str,
        version: &ModelVersion,
    ) -> Result<ModelVersion, DomainError> {
        debug!(registered_model_id = %id, name = %version.name, "Creating model version under registered model");

        let body = self
            .client
            .post(&Self::versions_path(id), encode(version)?)
            .await
            .map_err(|e| e.context("error posting model version"))?;

        decode(&body)
    }
}
