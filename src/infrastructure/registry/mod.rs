//! Model registry adapters - HTTP and static clients, repositories, lookup

mod codec;
mod fixtures;
mod http_client;
mod model_version_repository;
mod registered_model_repository;
mod resolver;
mod static_client;

pub use http_client::HttpRegistryClient;
pub use model_version_repository::{UpstreamModelVersionRepository, MODEL_VERSIONS_PATH};
pub use registered_model_repository::{UpstreamRegisteredModelRepository, REGISTERED_MODELS_PATH};
pub use resolver::StaticRegistryResolver;
pub use static_client::StaticRegistryClient;

#[cfg(test)]
pub use http_client::mock::{MockRegistryClient, RecordedRequest};
