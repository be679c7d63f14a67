//! Shared HTTP plumbing for the storefront endpoints
//!
//! Every endpoint replies with a JSON `{"message": "..."}` envelope
//! on both success and failure; nothing here inspects beyond that.

use std::time::Duration;

use serde::Deserialize;

use crate::utils::{AppError, AppResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reply envelope used by every storefront endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct ServerMessage {
    #[serde(default)]
    pub message: String,
}

pub(crate) fn build_client() -> AppResult<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Read the `{message}` envelope out of a reply
///
/// A success status returns the message for display. A failure status
/// becomes [`AppError::Transport`] carrying the server-supplied
/// message, degrading to the raw body and then the status code when
/// the envelope is missing.
pub(crate) async fn read_server_message(response: reqwest::Response) -> AppResult<String> {
    let status = response.status();
    let text = response.text().await?;
    let message = serde_json::from_str::<ServerMessage>(&text)
        .map(|reply| reply.message)
        .unwrap_or_else(|_| text.trim().to_string());

    if status.is_success() {
        Ok(message)
    } else if message.is_empty() {
        Err(AppError::transport(format!(
            "request failed with status {status}"
        )))
    } else {
        Err(AppError::transport(message))
    }
}
