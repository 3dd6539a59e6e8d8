//! JSON translation between registry payloads and domain types

use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::DomainError;

/// Decode an upstream response body
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DomainError> {
    serde_json::from_slice(body)
        .map_err(|e| DomainError::decode(format!("error decoding response data: {}", e)))
}

/// Encode a request body for the upstream
pub fn encode<T: Serialize>(value: &T) -> Result<Bytes, DomainError> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(|e| DomainError::internal(format!("error encoding request body: {}", e)))
}
