//! Application error types
//!
//! Every fallible operation in the crate returns [`AppResult`]. The
//! variants split along what the caller can do about the failure:
//!
//! | Variant | Meaning | Shown to shopper |
//! |---------|---------|------------------|
//! | `Validation` | caller input rejected before any side effect | as-is |
//! | `NotFound` | referenced product/line does not exist | as-is |
//! | `Storage` | persisted store failure | generic retry prompt |
//! | `Transport` | endpoint rejected the request | server message |
//! | `Http` | network-level failure before any reply | generic retry prompt |

use thiserror::Error;

use crate::store::StoreError;

/// Unified application error
#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected by local validation, before any side effect.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Persisted store failure.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// An endpoint replied with a non-success status. Carries the
    /// server-supplied message when one was sent.
    #[error("{0}")]
    Transport(String),

    /// Network-level failure: the request never got a reply.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Message safe to show the shopper.
    ///
    /// Validation failures and server-supplied messages pass through;
    /// infrastructure failures collapse to a generic retry prompt.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Transport(msg) => msg.clone(),
            AppError::NotFound(what) => format!("Not found: {what}"),
            AppError::Storage(_) | AppError::Http(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::validation("Please fill in all required fields");
        assert_eq!(err.user_message(), "Please fill in all required fields");
    }

    #[test]
    fn test_transport_message_passes_through() {
        let err = AppError::transport("Invalid order payload");
        assert_eq!(err.user_message(), "Invalid order payload");
    }

    #[test]
    fn test_storage_error_collapses_to_retry_prompt() {
        let err = AppError::Storage(StoreError::Serialization(
            serde_json::from_str::<i32>("not json").unwrap_err(),
        ));
        assert_eq!(err.user_message(), "Something went wrong. Please try again later.");
    }
}
