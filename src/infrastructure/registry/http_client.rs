use std::time::{Duration, Instant};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, Method, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{DomainError, RegistryClient, UpstreamPath};
use crate::infrastructure::logging::truncate_for_log;
use crate::infrastructure::observability::{record_upstream_request, UpstreamOutcome};

const MAX_ERROR_BODY_LEN: usize = 512;

/// Error body shape returned by the registry REST API
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

/// Registry client speaking HTTP via reqwest
#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpRegistryClient {
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        Self::build(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        Self::build(base_url, Some(timeout))
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Result<Self, DomainError> {
        let parsed = Url::parse(base_url).map_err(|e| {
            DomainError::configuration(format!("invalid registry base URL '{}': {}", base_url, e))
        })?;

        if parsed.cannot_be_a_base() {
            return Err(DomainError::configuration(format!(
                "registry base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Resolve a relative path against the base URL, encoding each segment
    fn url_for(&self, path: &UpstreamPath) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path.segments());
        }

        url
    }

    async fn send(
        &self,
        method: Method,
        path: &UpstreamPath,
        request: RequestBuilder,
    ) -> Result<Bytes, DomainError> {
        let start = Instant::now();
        debug!(method = %method, path = %path, "Calling model registry");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                record_upstream_request(
                    method.as_str(),
                    UpstreamOutcome::TransportError,
                    start.elapsed(),
                );
                warn!(method = %method, path = %path, error = %e, "Model registry unreachable");

                return Err(DomainError::transport(format!(
                    "{} {} failed: {}",
                    method, path, e
                )));
            }
        };

        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await.map_err(|e| {
                DomainError::transport(format!("{} {} body read failed: {}", method, path, e))
            })?;

            record_upstream_request(method.as_str(), UpstreamOutcome::Success, start.elapsed());

            return Ok(body);
        }

        let body = response.text().await.unwrap_or_default();
        let message = upstream_message(&body);

        if status == StatusCode::NOT_FOUND {
            record_upstream_request(method.as_str(), UpstreamOutcome::NotFound, start.elapsed());

            return Err(DomainError::not_found(format!("{} {}: {}", method, path, message)));
        }

        record_upstream_request(method.as_str(), UpstreamOutcome::HttpError, start.elapsed());
        warn!(method = %method, path = %path, status = %status.as_u16(), "Model registry returned an error");

        Err(DomainError::transport(format!(
            "{} {} returned HTTP {}: {}",
            method, path, status, message
        )))
    }

    fn json_request(&self, method: Method, path: &UpstreamPath, body: Bytes) -> RequestBuilder {
        self.client
            .request(method, self.url_for(path))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(body)
    }
}

/// Prefer the registry's error message, fall back to the raw body
fn upstream_message(body: &str) -> String {
    match serde_json::from_str::<UpstreamErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => truncate_for_log(body.trim(), MAX_ERROR_BODY_LEN),
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn get(
        &self,
        path: &UpstreamPath,
        query: &[(&'static str, String)],
    ) -> Result<Bytes, DomainError> {
        let mut request = self
            .client
            .get(self.url_for(path))
            .header(header::ACCEPT, "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }

        self.send(Method::GET, path, request).await
    }

    async fn post(&self, path: &UpstreamPath, body: Bytes) -> Result<Bytes, DomainError> {
        let request = self.json_request(Method::POST, path, body);
        self.send(Method::POST, path, request).await
    }

    async fn patch(&self, path: &UpstreamPath, body: Bytes) -> Result<Bytes, DomainError> {
        let request = self.json_request(Method::PATCH, path, body);
        self.send(Method::PATCH, path, request).await
    }
}
