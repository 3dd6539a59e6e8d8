use async_trait::async_trait;
use bytes::Bytes;

use super::UpstreamPath;
use crate::domain::DomainError;

/// Raw HTTP access to one upstream model registry.
///
/// Implementations return the response body for any 2xx status, a not-found
/// error for 404 and a transport error for everything else.
#[async_trait]
pub trait RegistryClient: Send + Sync + std::fmt::Debug {
    async fn get(
        &self,
        path: &UpstreamPath,
        query: &[(&'static str, String)],
    ) -> Result<Bytes, DomainError>;

    async fn post(&self, path: &UpstreamPath, body: Bytes) -> Result<Bytes, DomainError>;

    async fn patch(&self, path: &UpstreamPath, body: Bytes) -> Result<Bytes, DomainError>;
}
