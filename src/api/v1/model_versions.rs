//! Model version endpoints

use axum::response::Response;
use serde::Deserialize;
use tracing::{debug, info};

use super::{created, ResolvedRegistry};
use crate::api::paths::{self, MODEL_REGISTRY_ID, MODEL_VERSION_ID};
use crate::api::types::{ApiError, Envelope, Json, Path};
use crate::domain::{ModelVersion, ModelVersionUpdate};

#[derive(Debug, Deserialize)]
pub struct ModelVersionPath {
    pub model_version_id: String,
}

/// GET /api/v1/model_registry/{model_registry_id}/model_versions/{model_version_id}
pub async fn get_model_version(
    ResolvedRegistry(registry): ResolvedRegistry,
    Path(path): Path<ModelVersionPath>,
) -> Result<Json<Envelope<ModelVersion>>, ApiError> {
    debug!(registry = %registry.descriptor.name, model_version_id = %path.model_version_id, "Getting model version");

    let version = registry.model_versions.get(&path.model_version_id).await?;

    Ok(Json(Envelope::new(version)))
}

/// POST /api/v1/model_registry/{model_registry_id}/model_versions
pub async fn create_model_version(
    ResolvedRegistry(registry): ResolvedRegistry,
    Json(envelope): Json<Envelope<ModelVersion>>,
) -> Result<Response, ApiError> {
    debug!(registry = %registry.descriptor.name, name = %envelope.data.name, "Creating model version");

    let version = registry.model_versions.create(&envelope.data).await?;

    let id = version
        .id
        .clone()
        .ok_or_else(|| ApiError::internal("registry returned a model version without an id"))?;

    info!(registry = %registry.descriptor.name, model_version_id = %id, "Model version created");

    let location = paths::url_for(
        paths::MODEL_VERSION_PATH,
        &[(MODEL_REGISTRY_ID, &registry.descriptor.name), (MODEL_VERSION_ID, &id)],
    );

    Ok(created(location, version))
}

/// PATCH /api/v1/model_registry/{model_registry_id}/model_versions/{model_version_id}
pub async fn update_model_version(
    ResolvedRegistry(registry): ResolvedRegistry,
    Path(path): Path<ModelVersionPath>,
    Json(envelope): Json<Envelope<ModelVersionUpdate>>,
) -> Result<Json<Envelope<ModelVersion>>, ApiError> {
    debug!(registry = %registry.descriptor.name, model_version_id = %path.model_version_id, "Updating model version");

    let version = registry
        .model_versions
        .update(&path.model_version_id, &envelope.data)
        .await?;

    Ok(Json(Envelope::new(version)))
}
