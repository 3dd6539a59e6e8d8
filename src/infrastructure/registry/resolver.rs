//! Registry lookup by name, built once from configuration

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use super::{
    HttpRegistryClient, StaticRegistryClient, UpstreamModelVersionRepository,
    UpstreamRegisteredModelRepository,
};
use crate::config::RegistryConfig;
use crate::domain::{
    DomainError, ModelRegistry, ModelRegistryDescriptor, RegistryClient, RegistryResolver,
};

/// Fixed set of registries; read-only once built
#[derive(Debug, Default)]
pub struct StaticRegistryResolver {
    registries: HashMap<String, ModelRegistry>,
}

impl StaticRegistryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a registry reached through `client`
    pub fn with_client(
        self,
        descriptor: ModelRegistryDescriptor,
        client: Arc<dyn RegistryClient>,
    ) -> Self {
        self.with_registry(ModelRegistry {
            descriptor,
            registered_models: Arc::new(UpstreamRegisteredModelRepository::new(client.clone())),
            model_versions: Arc::new(UpstreamModelVersionRepository::new(client)),
        })
    }

    pub fn with_registry(mut self, registry: ModelRegistry) -> Self {
        self.registries
            .insert(registry.descriptor.name.clone(), registry);
        self
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self, DomainError> {
        let mut resolver = Self::new();

        for endpoint in &config.endpoints {
            if resolver.registries.contains_key(&endpoint.name) {
                return Err(DomainError::configuration(format!(
                    "duplicate model registry name '{}'",
                    endpoint.name
                )));
            }

            let client: Arc<dyn RegistryClient> = if config.mock {
                Arc::new(StaticRegistryClient::new())
            } else {
                Arc::new(HttpRegistryClient::with_timeout(
                    &endpoint.base_url,
                    config.timeout(),
                )?)
            };

            info!(
                registry = %endpoint.name,
                base_url = %endpoint.base_url,
                mock = config.mock,
                "Registered model registry"
            );

            let descriptor = ModelRegistryDescriptor {
                name: endpoint.name.clone(),
                display_name: endpoint
                    .display_name
                    .clone()
                    .unwrap_or_else(|| endpoint.name.clone()),
                description: endpoint.description.clone(),
            };

            resolver = resolver.with_client(descriptor, client);
        }

        Ok(resolver)
    }
}

impl RegistryResolver for StaticRegistryResolver {
    fn resolve(&self, name: &str) -> Result<ModelRegistry, DomainError> {
        self.registries
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("model registry '{}' not found", name)))
    }

    fn list(&self) -> Vec<ModelRegistryDescriptor> {
        let mut descriptors: Vec<_> = self
            .registries
            .values()
            .map(|r| r.descriptor.clone())
            .collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryEndpointConfig;

    fn endpoint(name: &str, base_url: &str) -> RegistryEndpointConfig {
        RegistryEndpointConfig {
            name: name.to_string(),
            base_url: base_url.to_string(),
            display_name: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let config = RegistryConfig {
            endpoints: vec![endpoint("model-registry", "http://localhost:8080/api")],
            ..Default::default()
        };
        let resolver = StaticRegistryResolver::from_config(&config).unwrap();

        let registry = resolver.resolve("model-registry").unwrap();
        assert_eq!(registry.descriptor.display_name, "model-registry");

        let err = resolver.resolve("other").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_is_sorted_by_name() {
        let config = RegistryConfig {
            endpoints: vec![
                endpoint("zeta", "http://zeta:8080/api"),
                endpoint("alpha", "http://alpha:8080/api"),
            ],
            ..Default::default()
        };
        let resolver = StaticRegistryResolver::from_config(&config).unwrap();

        let names: Vec<_> = resolver.list().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let config = RegistryConfig {
            endpoints: vec![
                endpoint("dup", "http://a:8080/api"),
                endpoint("dup", "http://b:8080/api"),
            ],
            ..Default::default()
        };

        let err = StaticRegistryResolver::from_config(&config).unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = RegistryConfig {
            endpoints: vec![endpoint("broken", "::not-a-url")],
            ..Default::default()
        };

        assert!(StaticRegistryResolver::from_config(&config).is_err());
    }

    #[test]
    fn test_mock_mode_skips_url_validation() {
        let config = RegistryConfig {
            mock: true,
            endpoints: vec![endpoint("dev", "::not-a-url")],
            ..Default::default()
        };

        assert!(StaticRegistryResolver::from_config(&config).is_ok());
    }
}
