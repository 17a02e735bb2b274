use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid configuration for '{field}' ({value}): {reason}")]
    ConfigError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Registry request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unexpected registry response: expected status {expected}, got {actual}")]
    ResponseError { expected: u16, actual: u16 },

    #[error("Registry document is malformed: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid service record at index {index}: {reason}")]
    InvalidRecordError { index: usize, reason: String },

    #[error("Template error: {message}")]
    TemplateError { message: String },

    #[error("Failed to write generated source to {}: {source}", .path.display())]
    EmitError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Network,
    Decode,
    Output,
}

impl GenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::ConfigError { .. } => ErrorCategory::Config,
            GenError::NetworkError(_) | GenError::ResponseError { .. } => ErrorCategory::Network,
            GenError::DecodeError(_) | GenError::InvalidRecordError { .. } => ErrorCategory::Decode,
            GenError::TemplateError { .. } | GenError::EmitError { .. } => ErrorCategory::Output,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Decode => 3,
            ErrorCategory::Output => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenError::ConfigError { field, reason, .. } => {
                format!("Configuration problem with {}: {}", field, reason)
            }
            GenError::NetworkError(e) if e.is_timeout() => {
                "The registry did not answer in time".to_string()
            }
            GenError::NetworkError(_) => "Could not reach the services registry".to_string(),
            GenError::ResponseError { expected, actual } => format!(
                "The registry answered with HTTP {} instead of {}",
                actual, expected
            ),
            GenError::DecodeError(_) | GenError::InvalidRecordError { .. } => {
                format!("The registry document could not be used: {}", self)
            }
            GenError::TemplateError { .. } => {
                format!("The code template is broken: {}", self)
            }
            GenError::EmitError { path, .. } => {
                format!("Could not write {}", path.display())
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Config => "Check the URL environment variable or the --url flag",
            ErrorCategory::Network => {
                "Check network connectivity and that the registry URL is correct, then run again"
            }
            ErrorCategory::Decode => {
                "The upstream registry format may have changed; inspect the document by hand"
            }
            ErrorCategory::Output => {
                "Run from the repository root and check permissions on the output directory"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
