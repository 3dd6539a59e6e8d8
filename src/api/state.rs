//! Application state for shared services

use std::sync::Arc;

use crate::domain::RegistryResolver;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registries: Arc<dyn RegistryResolver>,
}

impl AppState {
    pub fn new(registries: Arc<dyn RegistryResolver>) -> Self {
        Self { registries }
    }
}
