//! Account client for the opaque login/signup endpoints
//!
//! Credential checking and session state live entirely on the server;
//! this client only ships the forms and relays the reply message.

use serde::Serialize;

use crate::utils::AppResult;

use super::http::{build_client, read_server_message};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupRequest<'a> {
    full_name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the account endpoints
#[derive(Debug, Clone)]
pub struct AccountClient {
    client: reqwest::Client,
    base_url: String,
}

impl AccountClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Register a new account via `/signup`; returns the server message
    pub async fn signup(&self, full_name: &str, email: &str, password: &str) -> AppResult<String> {
        let result = self
            .post_json(
                "/signup",
                &SignupRequest {
                    full_name,
                    email,
                    password,
                },
            )
            .await;
        if let Err(err) = &result {
            tracing::warn!("Signup request failed: {err}");
        }
        result
    }

    /// Authenticate via `/login1`; returns the server message
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let result = self
            .post_json("/login1", &LoginRequest { email, password })
            .await;
        if let Err(err) = &result {
            tracing::warn!("Login request failed: {err}");
        }
        result
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> AppResult<String> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        read_server_message(response).await
    }
}
