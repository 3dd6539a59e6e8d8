//! Route templates for the public API.
//!
//! The same templates register routes and render `Location` headers.

use reqwest::Url;

use crate::domain::DomainError;

pub const MODEL_REGISTRY_ID: &str = "model_registry_id";
pub const REGISTERED_MODEL_ID: &str = "registered_model_id";
pub const MODEL_VERSION_ID: &str = "model_version_id";

pub const HEALTHCHECK_PATH: &str = "/api/v1/healthcheck";
pub const LIVE_PATH: &str = "/live";

pub const MODEL_REGISTRY_LIST_PATH: &str = "/api/v1/model_registry";
pub const REGISTERED_MODEL_LIST_PATH: &str =
    "/api/v1/model_registry/{model_registry_id}/registered_models";
pub const REGISTERED_MODEL_PATH: &str =
    "/api/v1/model_registry/{model_registry_id}/registered_models/{registered_model_id}";
pub const REGISTERED_MODEL_VERSIONS_PATH: &str =
    "/api/v1/model_registry/{model_registry_id}/registered_models/{registered_model_id}/versions";
pub const MODEL_VERSION_LIST_PATH: &str =
    "/api/v1/model_registry/{model_registry_id}/model_versions";
pub const MODEL_VERSION_PATH: &str =
    "/api/v1/model_registry/{model_registry_id}/model_versions/{model_version_id}";

/// Every route template served by the API
pub const ROUTE_TEMPLATES: &[&str] = &[
    HEALTHCHECK_PATH,
    LIVE_PATH,
    MODEL_REGISTRY_LIST_PATH,
    REGISTERED_MODEL_LIST_PATH,
    REGISTERED_MODEL_PATH,
    REGISTERED_MODEL_VERSIONS_PATH,
    MODEL_VERSION_LIST_PATH,
    MODEL_VERSION_PATH,
];

/// Check that an extra static route can be mounted beside the API routes
pub fn check_route_is_free(path: &str) -> Result<(), DomainError> {
    if !path.starts_with('/') || path.contains(['{', '}', '*']) {
        return Err(DomainError::configuration(format!(
            "route '{}' must be a static path starting with '/'",
            path
        )));
    }

    if ROUTE_TEMPLATES.contains(&path) {
        return Err(DomainError::configuration(format!(
            "route '{}' is already served by the API",
            path
        )));
    }

    Ok(())
}

/// Fill a route template, percent-encoding each substituted segment.
///
/// Unknown placeholders are left as they are.
pub fn url_for(template: &str, params: &[(&str, &str)]) -> String {
    // Only the path of this URL is used; the host never leaves this function
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return template.to_string();
    };

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear();

        for segment in template.split('/').filter(|s| !s.is_empty()) {
            let value = segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .and_then(|name| params.iter().find(|(key, _)| *key == name))
                .map(|(_, value)| *value)
                .unwrap_or(segment);

            segments.push(value);
        }
    }

    url.path().to_string()
}
