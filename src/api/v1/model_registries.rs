//! Registry discovery endpoint

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{Envelope, Json};
use crate::domain::ModelRegistryDescriptor;

/// GET /api/v1/model_registry
pub async fn list_model_registries(
    State(state): State<AppState>,
) -> Json<Envelope<Vec<ModelRegistryDescriptor>>> {
    Json(Envelope::new(state.registries.list()))
}
