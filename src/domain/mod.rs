//! Domain layer - Registry resources and the ports used to reach them

pub mod error;
pub mod list;
pub mod metadata;
pub mod model_version;
pub mod registered_model;
pub mod registry;

pub use error::DomainError;
pub use list::{ListQuery, ResourceList};
pub use metadata::{CustomProperties, MetadataValue};
pub use model_version::{ModelVersion, ModelVersionRepository, ModelVersionUpdate};
pub use registered_model::{
    RegisteredModel, RegisteredModelRepository, RegisteredModelUpdate, ResourceState,
};
pub use registry::{
    ModelRegistry, ModelRegistryDescriptor, RegistryClient, RegistryResolver, UpstreamPath,
};
