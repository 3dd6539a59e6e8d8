//! Registered model endpoints

use axum::response::Response;
use serde::Deserialize;
use tracing::{debug, info};

use super::{created, ResolvedRegistry};
use crate::api::paths::{self, MODEL_REGISTRY_ID, MODEL_VERSION_ID, REGISTERED_MODEL_ID};
use crate::api::types::{ApiError, Envelope, Json, ListEnvelope, Path, Query};
use crate::domain::{ListQuery, ModelVersion, RegisteredModel, RegisteredModelUpdate};

#[derive(Debug, Deserialize)]
pub struct RegisteredModelPath {
    pub registered_model_id: String,
}

/// GET /api/v1/model_registry/{model_registry_id}/registered_models
pub async fn list_registered_models(
    ResolvedRegistry(registry): ResolvedRegistry,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListEnvelope<RegisteredModel>>, ApiError> {
    debug!(registry = %registry.descriptor.name, "Listing registered models");

    let models = registry.registered_models.list(&query).await?;

    Ok(Json(Envelope::new(models)))
}

/// POST /api/v1/model_registry/{model_registry_id}/registered_models
pub async fn create_registered_model(
    ResolvedRegistry(registry): ResolvedRegistry,
    Json(envelope): Json<Envelope<RegisteredModel>>,
) -> Result<Response, ApiError> {
    debug!(registry = %registry.descriptor.name, name = %envelope.data.name, "Creating registered model");

    let model = registry.registered_models.create(&envelope.data).await?;

    let id = model
        .id
        .clone()
        .ok_or_else(|| ApiError::internal("registry returned a registered model without an id"))?;

    info!(registry = %registry.descriptor.name, registered_model_id = %id, "Registered model created");

    let location = paths::url_for(
        paths::REGISTERED_MODEL_PATH,
        &[(MODEL_REGISTRY_ID, &registry.descriptor.name), (REGISTERED_MODEL_ID, &id)],
    );

    Ok(created(location, model))
}

/// GET /api/v1/model_registry/{model_registry_id}/registered_models/{registered_model_id}
pub async fn get_registered_model(
    ResolvedRegistry(registry): ResolvedRegistry,
    Path(path): Path<RegisteredModelPath>,
) -> Result<Json<Envelope<RegisteredModel>>, ApiError> {
    debug!(registry = %registry.descriptor.name, registered_model_id = %path.registered_model_id, "Getting registered model");

    let model = registry
        .registered_models
        .get(&path.registered_model_id)
        .await?;

    Ok(Json(Envelope::new(model)))
}

/// PATCH /api/v1/model_registry/{model_registry_id}/registered_models/{registered_model_id}
pub async fn update_registered_model(
    ResolvedRegistry(registry): ResolvedRegistry,
    Path(path): Path<RegisteredModelPath>,
    Json(envelope): Json<Envelope<RegisteredModelUpdate>>,
) -> Result<Json<Envelope<RegisteredModel>>, ApiError> {
    debug!(registry = %registry.descriptor.name, registered_model_id = %path.registered_model_id, "Updating registered model");

    let model = registry
        .registered_models
        .update(&path.registered_model_id, &envelope.data)
        .await?;

    Ok(Json(Envelope::new(model)))
}

/// GET /api/v1/model_registry/{model_registry_id}/registered_models/{registered_model_id}/versions
pub async fn list_model_versions_for_registered_model(
    ResolvedRegistry(registry): ResolvedRegistry,
    Path(path): Path<RegisteredModelPath>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListEnvelope<ModelVersion>>, ApiError> {
    debug!(registry = %registry.descriptor.name, registered_model_id = %path.registered_model_id, "Listing model versions");

    let versions = registry
        .registered_models
        .list_versions(&path.registered_model_id, &query)
        .await?;

    Ok(Json(Envelope::new(versions)))
}

/// POST /api/v1/model_registry/{model_registry_id}/registered_models/{registered_model_id}/versions
///
/// The returned `Location` is the flat model version path, which is where
/// the version is read back from.
pub async fn create_model_version_for_registered_model(
    ResolvedRegistry(registry): ResolvedRegistry,
    Path(path): Path<RegisteredModelPath>,
    Json(envelope): Json<Envelope<ModelVersion>>,
) -> Result<Response, ApiError> {
    debug!(registry = %registry.descriptor.name, registered_model_id = %path.registered_model_id, "Creating model version");

    let version = registry
        .registered_models
        .create_version(&path.registered_model_id, &envelope.data)
        .await?;

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
