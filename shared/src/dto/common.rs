use serde::{Deserialize, Serialize};

/// Common error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Extracts the error message from a response body, if it has one
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|response| response.error)
            .filter(|message| !message.is_empty())
    }
}
