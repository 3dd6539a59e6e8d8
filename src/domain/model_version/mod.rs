mod entity;
mod repository;

pub use entity::{ModelVersion, ModelVersionUpdate};
#[cfg(test)]
pub use repository::MockModelVersionRepository;
pub use repository::ModelVersionRepository;
