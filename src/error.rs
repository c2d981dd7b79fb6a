//! Domain-specific error types for cancel-insight

use thiserror::Error;

/// Main error type for the analysis service
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Provider error: {message}")]
    Provider { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Timeout error: {operation} timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for InsightError {
    fn from(err: anyhow::Error) -> Self {
        InsightError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for InsightError {
    fn from(err: serde_json::Error) -> Self {
        InsightError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for InsightError {
    fn from(err: reqwest::Error) -> Self {
        InsightError::Provider {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, InsightError>;
