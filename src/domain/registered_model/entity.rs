//! Registered model entity

use serde::{Deserialize, Serialize};

use crate::domain::metadata::CustomProperties;

/// Lifecycle state shared by registry resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceState {
    #[default]
    Live,
    Archived,
}

/// A named model tracked by the registry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ResourceState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time_since_epoch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_time_since_epoch: Option<String>,
}

impl RegisteredModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Partial update; absent fields are left untouched upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredModelUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ResourceState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metadata::MetadataValue;

    #[test]
    fn test_new_model_serializes_name_only() {
        let json = serde_json::to_string(&RegisteredModel::new("Model One")).unwrap();
        assert_eq!(json, r#"{"name":"Model One"}"#);
    }

    #[test]
    fn test_decode_upstream_model() {
        let json = r#"{
            "id": "1",
            "name": "Model One",
            "state": "ARCHIVED",
            "externalId": "ext-1",
            "createTimeSinceEpoch": "1710404288975",
            "customProperties": {
                "team": {"metadataType": "MetadataStringValue", "string_value": "fraud"}
            }
        }"#;

        let model: RegisteredModel = serde_json::from_str(json).unwrap();

        assert_eq!(model.id.as_deref(), Some("1"));
        assert_eq!(model.state, Some(ResourceState::Archived));
        assert_eq!(model.external_id.as_deref(), Some("ext-1"));
        assert_eq!(
            model.custom_properties.unwrap()["team"],
            MetadataValue::string("fraud")
        );
    }

    #[test]
    fn test_update_omits_absent_fields() {
        let update = RegisteredModelUpdate {
            state: Some(ResourceState::Archived),
            ..Default::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"state":"ARCHIVED"}"#);
    }

    #[test]
    fn test_update_ignores_unknown_fields() {
        let update: RegisteredModelUpdate =
            serde_json::from_str(r#"{"name": "Model One", "owner": "alice"}"#).unwrap();

        assert_eq!(update.owner.as_deref(), Some("alice"));
        assert!(update.description.is_none());
    }
}
