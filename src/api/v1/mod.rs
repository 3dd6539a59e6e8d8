//! Versioned model registry API

pub mod model_registries;
pub mod model_versions;
pub mod registered_models;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use super::paths;
use super::state::AppState;
use super::types::{ApiError, Envelope, Json, Path};
use crate::domain::ModelRegistry;

#[derive(Debug, Deserialize)]
pub struct RegistryPath {
    pub model_registry_id: String,
}

/// The registry named by `{model_registry_id}`.
///
/// Resolved from the request parts, so an unknown registry is reported
/// before the body is read.
pub struct ResolvedRegistry(pub ModelRegistry);

impl FromRequestParts<AppState> for ResolvedRegistry {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Path(RegistryPath { model_registry_id }) =
            Path::<RegistryPath>::from_request_parts(parts, state).await?;

        Ok(Self(state.registries.resolve(&model_registry_id)?))
    }
}

/// 201 response carrying a `Location` header and the created resource
fn created<T: Serialize>(location: String, data: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(Envelope::new(data)),
    )
        .into_response()
}

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            paths::MODEL_REGISTRY_LIST_PATH,
            get(model_registries::list_model_registries),
        )
        .route(
            paths::REGISTERED_MODEL_LIST_PATH,
            get(registered_models::list_registered_models)
                .post(registered_models::create_registered_model),
        )
        .route(
            paths::REGISTERED_MODEL_PATH,
            get(registered_models::get_registered_model)
                .patch(registered_models::update_registered_model),
        )
        .route(
            paths::REGISTERED_MODEL_VERSIONS_PATH,
            get(registered_models::list_model_versions_for_registered_model)
                .post(registered_models::create_model_version_for_registered_model),
        )
        .route(
            paths::MODEL_VERSION_LIST_PATH,
            post(model_versions::create_model_version),
        )
        .route(
            paths::MODEL_VERSION_PATH,
            get(model_versions::get_model_version).patch(model_versions::update_model_version),
        )
}
