//! Model version repository backed by a registry client

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::codec::{decode, encode};
use crate::domain::{
    DomainError, ModelVersion, ModelVersionRepository, ModelVersionUpdate, RegistryClient,
    UpstreamPath,
};

pub const MODEL_VERSIONS_PATH: &str = "/model_versions";

#[derive(Debug, Clone)]
pub struct UpstreamModelVersionRepository {
    client: Arc<dyn RegistryClient>,
}

impl UpstreamModelVersionRepository {
    pub fn new(client: Arc<dyn RegistryClient>) -> Self {
        Self { client }
    }

    fn version_path(id: &str) -> UpstreamPath {
        UpstreamPath::new(MODEL_VERSIONS_PATH).join(id)
    }
}

#[async_trait]
impl ModelVersionRepository for UpstreamModelVersionRepository {
    async fn get(&self, id: &str) -> Result<ModelVersion, DomainError> {
        debug!(model_version_id = %id, "Getting model version");

        let body = self
            .client
            .get(&Self::version_path(id), &[])
            .await
            .map_err(|e| e.context("error fetching model version"))?;

        decode(&body)
    }

    async fn create(&self, version: &ModelVersion) -> Result<ModelVersion, DomainError> {
        debug!(name = %version.name, registered_model_id = %version.registered_model_id, "Creating model version");

        let body = self
            .client
            .post(&UpstreamPath::new(MODEL_VERSIONS_PATH), encode(version)?)
            .await
            .map_err(|e| e.context("error posting model version"))?;

        decode(&body)
    }

    async fn update(
        &self,
        id: &str,
        update: &ModelVersionUpdate,
    ) -> Result<ModelVersion, DomainError> {
        debug!(model_version_id = %id, "Updating model version");

        let body = self
            .client
            .patch(&Self::version_path(id), encode(update)?)
            .await
            .map_err(|e| e.context("error patching model version"))?;

        decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::registry::http_client::mock::MockRegistryClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_model_version() {
        let client = Arc::new(MockRegistryClient::new().with_json(
            "GET /model_versions/1",
            json!({"id": "1", "name": "Version One", "registeredModelId": "1"}),
        ));
        let repo = UpstreamModelVersionRepository::new(client);

        let version = repo.get("1").await.unwrap();

        assert_eq!(version.name, "Version One");
        assert_eq!(version.registered_model_id, "1");
    }

    #[tokio::test]
    async fn test_create_posts_to_flat_collection() {
        let client = Arc::new(MockRegistryClient::new().with_json(
            "POST /model_versions",
            json!({"id": "1", "name": "Model One", "registeredModelId": "1"}),
        ));
        let repo = UpstreamModelVersionRepository::new(client.clone());

        let created = repo.create(&ModelVersion::new("Model One", "1")).await.unwrap();

        assert_eq!(created.id.as_deref(), Some("1"));
        assert_eq!(client.requests()[0].path, "/model_versions");
    }

    #[tokio::test]
    async fn test_update_sends_partial_body() {
        let client = Arc::new(MockRegistryClient::new().with_json(
            "PATCH /model_versions/2",
            json!({"id": "2", "name": "Version Two", "author": "bob"}),
        ));
        let repo = UpstreamModelVersionRepository::new(client.clone());

        let update = ModelVersionUpdate {
            author: Some("bob".to_string()),
            ..Default::default()
        };
        let version = repo.update("2", &update).await.unwrap();

        assert_eq!(version.author.as_deref(), Some("bob"));
        assert_eq!(&client.requests()[0].body.clone().unwrap()[..], br#"{"author":"bob"}"#);
    }

    #[tokio::test]
    async fn test_empty_body_is_decode_error() {
        let client = Arc::new(MockRegistryClient::new().with_response("GET /model_versions/1", ""));
        let repo = UpstreamModelVersionRepository::new(client);

        assert!(matches!(
            repo.get("1").await.unwrap_err(),
            DomainError::Decode { .. }
        ));
    }
}
