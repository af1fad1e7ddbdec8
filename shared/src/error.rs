use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}")]
    Http { status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl SharedError {
    /// True for failures reported by the service itself rather than the transport
    pub fn is_http(&self) -> bool {
        matches!(self, SharedError::Http { .. })
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Parse(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
