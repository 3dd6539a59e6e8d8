//! In-process registry client answering from fixed data

use async_trait::async_trait;
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::codec::{decode, encode};
use super::fixtures;
use crate::domain::{
    DomainError, ModelVersion, RegisteredModel, RegistryClient, ResourceList, UpstreamPath,
};

/// Registry client for development and tests.
///
/// Reads come from the configured data. Writes are answered by overlaying
/// the request body on an existing entry, so nothing is ever stored and the
/// client can be shared freely between requests.
#[derive(Debug, Clone)]
pub struct StaticRegistryClient {
    registered_models: Vec<RegisteredModel>,
    model_versions: Vec<ModelVersion>,
}

impl StaticRegistryClient {
    pub fn new() -> Self {
        Self::with_data(fixtures::registered_models(), fixtures::model_versions())
    }

    pub fn with_data(
        registered_models: Vec<RegisteredModel>,
        model_versions: Vec<ModelVersion>,
    ) -> Self {
        Self {
            registered_models,
            model_versions,
        }
    }

    fn find_model(&self, id: &str) -> Result<&RegisteredModel, DomainError> {
        self.registered_models
            .iter()
            .find(|m| m.id.as_deref() == Some(id))
            .ok_or_else(|| DomainError::not_found(format!("no registered model found for id {}", id)))
    }

    fn find_version(&self, id: &str) -> Result<&ModelVersion, DomainError> {
        self.model_versions
            .iter()
            .find(|v| v.id.as_deref() == Some(id))
            .ok_or_else(|| DomainError::not_found(format!("no model version found for id {}", id)))
    }

    fn versions_of(&self, id: &str) -> Vec<ModelVersion> {
        self.model_versions
            .iter()
            .filter(|v| v.registered_model_id == id)
            .cloned()
            .collect()
    }

    fn template_model(&self) -> Result<&RegisteredModel, DomainError> {
        self.registered_models
            .first()
            .ok_or_else(|| DomainError::internal("static registry has no registered models"))
    }

    fn template_version(&self) -> Result<&ModelVersion, DomainError> {
        self.model_versions
            .first()
            .ok_or_else(|| DomainError::internal("static registry has no model versions"))
    }
}

impl Default for StaticRegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge the fields of a JSON object body onto `base`, keeping its `id`
fn overlay<T>(base: &T, body: &[u8], extra: &[(&str, &str)]) -> Result<Bytes, DomainError>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(base)?;
    let patch: Value = decode(body)?;

    let (Value::Object(target), Value::Object(fields)) = (&mut merged, patch) else {
        return Err(DomainError::decode("request body must be a JSON object"));
    };

    for (key, value) in fields {
        if key != "id" {
            target.insert(key, value);
        }
    }

    for (key, value) in extra {
        target.insert(key.to_string(), Value::String(value.to_string()));
    }

    // Round-trip through the typed entity so the result has the upstream shape
    let typed: T = serde_json::from_value(merged)?;
    encode(&typed)
}

#[async_trait]
impl RegistryClient for StaticRegistryClient {
    async fn get(
        &self,
        path: &UpstreamPath,
        _query: &[(&'static str, String)],
    ) -> Result<Bytes, DomainError> {
        let segments: Vec<&str> = path.segments().iter().map(String::as_str).collect();

        match segments.as_slice() {
            ["registered_models"] => {
                encode(&ResourceList::single_page(self.registered_models.clone()))
            }
            ["registered_models", id] => encode(self.find_model(id)?),
            ["registered_models", id, "versions"] => {
                self.find_model(id)?;
                encode(&ResourceList::single_page(self.versions_of(id)))
            }
            ["model_versions", id] => encode(self.find_version(id)?),
            _ => Err(DomainError::not_found(format!("GET {}: no such resource", path))),
        }
    }

    async fn post(&self, path: &UpstreamPath, body: Bytes) -> Result<Bytes, DomainError> {
        let segments: Vec<&str> = path.segments().iter().map(String::as_str).collect();

        match segments.as_slice() {
            ["registered_models"] => overlay(self.template_model()?, &body, &[]),
            ["registered_models", id, "versions"] => {
                self.find_model(id)?;
                overlay(self.template_version()?, &body, &[("registeredModelId", *id)])
            }
            ["model_versions"] => overlay(self.template_version()?, &body, &[]),
            _ => Err(DomainError::not_found(format!("POST {}: no such resource", path))),
        }
    }

    async fn patch(&self, path: &UpstreamPath, body: Bytes) -> Result<Bytes, DomainError> {
        let segments: Vec<&str> = path.segments().iter().map(String::as_str).collect();

        match segments.as_slice() {
            ["registered_models", id] => overlay(self.find_model(id)?, &body, &[]),
            ["model_versions", id] => overlay(self.find_version(id)?, &body, &[]),
            _ => Err(DomainError::not_found(format!("PATCH {}: no such resource", path))),
        }
    }
}
