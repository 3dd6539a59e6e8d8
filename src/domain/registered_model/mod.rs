mod entity;
mod repository;

pub use entity::{RegisteredModel, RegisteredModelUpdate, ResourceState};
#[cfg(test)]
pub use repository::MockRegisteredModelRepository;
pub use repository::RegisteredModelRepository;
