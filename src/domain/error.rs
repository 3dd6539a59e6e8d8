use thiserror::Error;

/// Core domain errors
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Upstream transport error: {message}")]
    Transport { message: String },

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Prefix the message with what the caller was doing, keeping the kind
    pub fn context(self, context: impl std::fmt::Display) -> Self {
        match self {
            Self::NotFound { message } => Self::not_found(format!("{}: {}", context, message)),
            Self::Transport { message } => Self::transport(format!("{}: {}", context, message)),
            Self::Decode { message } => Self::decode(format!("{}: {}", context, message)),
            Self::Configuration { message } => {
                Self::configuration(format!("{}: {}", context, message))
            }
            Self::Internal { message } => Self::internal(format!("{}: {}", context, message)),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}
