use gloo_net::http::Response;
use log::error;
use shared::{ErrorResponse, SharedError};

/// Maps transport errors from gloo-net
pub fn network_error(e: gloo_net::Error) -> SharedError {
    SharedError::Network(e.to_string())
}

/// Passes 2xx responses through; anything else becomes `SharedError::Http`
/// after logging whatever message the service put in the body.
pub async fn ensure_ok(response: Response, context: &str) -> Result<Response, SharedError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match ErrorResponse::message_from(&body) {
        Some(message) => error!("{} failed with status {}: {}", context, status, message),
        None => error!("{} failed with status {}", context, status),
    }
    Err(SharedError::Http { status })
}
