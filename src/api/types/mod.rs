//! API wire types

pub mod envelope;
pub mod error;
pub mod extract;
pub mod json;

pub use envelope::{Envelope, ListEnvelope};
pub use error::{ApiError, ErrorEnvelope, HttpError};
pub use extract::{Path, Query};
pub use json::Json;
