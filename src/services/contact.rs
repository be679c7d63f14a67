//! Contact form client
//!
//! Validation runs locally before anything leaves the process; the
//! endpoint itself is an opaque collaborator.

use serde::{Deserialize, Serialize};

use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, is_valid_email,
    is_valid_phone,
};
use crate::utils::{AppError, AppResult};

use super::http::{build_client, read_server_message};

/// A contact-form submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Client for the contact endpoint
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContactClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Field checks in form order; the first failure is reported
    pub fn validate(message: &ContactMessage) -> AppResult<()> {
        let filled = [
            message.name.as_str(),
            message.email.as_str(),
            message.phone.as_str(),
            message.message.as_str(),
        ]
        .iter()
        .all(|field| !field.trim().is_empty());
        if !filled {
            return Err(AppError::validation("Please fill out all fields."));
        }
        if message.name.trim().len() > MAX_NAME_LEN
            || message.email.trim().len() > MAX_EMAIL_LEN
            || message.phone.trim().len() > MAX_SHORT_TEXT_LEN
            || message.message.trim().len() > MAX_MESSAGE_LEN
        {
            return Err(AppError::validation("Please shorten your message."));
        }
        if !is_valid_email(&message.email) {
            return Err(AppError::validation("Please enter a valid email address."));
        }
        if !is_valid_phone(&message.phone) {
            return Err(AppError::validation(
                "Please enter a valid 10-digit phone number.",
            ));
        }
        Ok(())
    }

    /// Validate locally, then POST to `/submit-form`; returns the
    /// server message for display
    pub async fn submit(&self, message: &ContactMessage) -> AppResult<String> {
        Self::validate(message)?;
        let result = self.post_form(message).await;
        if let Err(err) = &result {
            tracing::warn!("Contact form delivery failed: {err}");
        }
        result
    }

    async fn post_form(&self, message: &ContactMessage) -> AppResult<String> {
        let response = self
            .client
            .post(format!("{}/submit-form", self.base_url))
            .json(message)
            .send()
            .await?;
        read_server_message(response).await
    }
}
