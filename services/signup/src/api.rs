//! Client for the registration API
//!
//! The form only needs one operation from the backend: create a user from
//! a completed draft. It is expressed as a trait so the form can be driven
//! against any transport.

use std::future::Future;
use std::time::Duration;

use common::config::SignupConfig;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info};

use crate::models::RegistrationDraft;

/// Error returned by the registration API
#[derive(Error, Debug)]
pub enum EndpointError {
    /// The request never produced a response (connection, timeout, ...)
    #[error("Registration request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Registration rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl EndpointError {
    /// Message suitable for showing next to the form
    pub fn user_message(&self) -> String {
        match self {
            EndpointError::Transport(_) => {
                "Unable to reach the registration service, please try again".to_string()
            }
            EndpointError::Rejected { message, .. } => message.clone(),
        }
    }
}

/// Operation that persists a new user
pub trait RegistrationEndpoint {
    fn add_user(
        &self,
        draft: &RegistrationDraft,
    ) -> impl Future<Output = Result<(), EndpointError>> + Send;
}

/// Registration endpoint backed by the HTTP API
#[derive(Debug, Clone)]
pub struct HttpRegistrationEndpoint {
    client: Client,
    base_url: String,
}

impl HttpRegistrationEndpoint {
    /// Create a client for the API at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EndpointError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        info!("Registration client initialized with URL: {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &SignupConfig) -> Result<Self, EndpointError> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

impl RegistrationEndpoint for HttpRegistrationEndpoint {
    async fn add_user(&self, draft: &RegistrationDraft) -> Result<(), EndpointError> {
        info!("Registering user: {}", draft.email);

        let response = self
            .client
            .post(self.users_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send registration request: {}", e);
                EndpointError::Transport(e)
            })?;

        let status = response.status();
        if status.is_success() {
            info!("User registered: {}", draft.email);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = rejection_message(status, &body);
        error!("Registration rejected with status {}: {}", status, message);

        Err(EndpointError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull a readable message out of an error response body
fn rejection_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .into_iter()
                .find_map(|key| value.get(key).and_then(|m| m.as_str()).map(str::to_string))
        });

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}
