//! Sample registry content served in mock mode

use crate::domain::{
    CustomProperties, MetadataValue, ModelVersion, RegisteredModel, ResourceState,
};

const CREATED_AT: &str = "1710404288975";
const UPDATED_AT: &str = "1710404288975";

pub fn registered_models() -> Vec<RegisteredModel> {
    let mut properties = CustomProperties::new();
    properties.insert("tensorflow".to_string(), MetadataValue::string(""));
    properties.insert("stage".to_string(), MetadataValue::string("dev"));

    vec![RegisteredModel {
        id: Some("1".to_string()),
        name: "Model One".to_string(),
        description: Some("This model does things and stuff".to_string()),
        external_id: Some("934589798".to_string()),
        custom_properties: Some(properties),
        state: Some(ResourceState::Live),
        owner: Some("Sherlock Holmes".to_string()),
        create_time_since_epoch: Some(CREATED_AT.to_string()),
        last_update_time_since_epoch: Some(UPDATED_AT.to_string()),
    }]
}

pub fn model_versions() -> Vec<ModelVersion> {
    vec![
        fixture_version("1", "Version One", "Version one of model one", "Sherlock Holmes"),
        fixture_version("2", "Version Two", "Version two of model one", "Dr. Watson"),
    ]
}

fn fixture_version(id: &str, name: &str, description: &str, author: &str) -> ModelVersion {
    let mut properties = CustomProperties::new();
    properties.insert("accuracy".to_string(), MetadataValue::double(0.87));

    ModelVersion {
        id: Some(id.to_string()),
        name: name.to_string(),
        registered_model_id: "1".to_string(),
        description: Some(description.to_string()),
        external_id: None,
        custom_properties: Some(properties),
        state: Some(ResourceState::Live),
        author: Some(author.to_string()),
        create_time_since_epoch: Some(CREATED_AT.to_string()),
        last_update_time_since_epoch: Some(UPDATED_AT.to_string()),
    }
}
