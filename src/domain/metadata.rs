//! Custom property values as the registry encodes them

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Open key-value map attached to registry resources
pub type CustomProperties = HashMap<String, MetadataValue>;

/// A single custom property value, discriminated by `metadataType`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metadataType")]
pub enum MetadataValue {
    /// 64-bit integers travel as strings
    #[serde(rename = "MetadataIntValue")]
    Int { int_value: String },

    #[serde(rename = "MetadataDoubleValue")]
    Double { double_value: f64 },

    #[serde(rename = "MetadataStringValue")]
    String { string_value: String },

    /// Base64 encoded `google.protobuf.Struct`
    #[serde(rename = "MetadataStructValue")]
    Struct { struct_value: String },

    #[serde(rename = "MetadataBoolValue")]
    Bool { bool_value: bool },

    #[serde(rename = "MetadataProtoValue")]
    Proto {
        #[serde(rename = "type")]
        type_url: String,
        proto_value: String,
    },
}

impl MetadataValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            string_value: value.into(),
        }
    }

    pub fn int(value: i64) -> Self {
        Self::Int {
            int_value: value.to_string(),
        }
    }

    pub fn bool(value: bool) -> Self {
        Self::Bool { bool_value: value }
    }

    pub fn double(value: f64) -> Self {
        Self::Double {
            double_value: value,
        }
    }
}
