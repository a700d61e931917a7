use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestructureError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Tag entry #{index} under theme '{theme}' has no tag_name")]
    MissingTagName { theme: String, index: usize },

    #[error("Schema violation at {location}: {message}")]
    SchemaViolation { location: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    MissingInput,
    Io,
    Parse,
    Schema,
    Config,
}

impl RestructureError {
    pub fn schema(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotFound { .. } => ErrorCategory::MissingInput,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) => ErrorCategory::Parse,
            Self::MissingTagName { .. } | Self::SchemaViolation { .. } => ErrorCategory::Schema,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// 給終端使用者看的單行訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputNotFound { path } => format!("Cannot find input file {}", path),
            Self::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            Self::MissingTagName { theme, index } => format!(
                "Tag #{} in theme '{}' is missing the required tag_name field",
                index, theme
            ),
            other => format!("Processing failed: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, RestructureError>;
