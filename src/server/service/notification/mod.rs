//! Application notification service for the team's Telegram chat.
//!
//! This module provides the `ApplicationNotifier`, which posts a summary of every stored
//! application to a Telegram chat through the Bot API. Notification is a best-effort side
//! channel: the caller receives a `Result` and decides what to do with a failure, which
//! for submissions means logging it and nothing else.
//!
//! The service is organized into separate modules by concern:
//! - `builder` - Message formatting

pub mod builder;

use serde::Serialize;

use crate::server::{error::notify::NotifyError, model::application::Application};

/// Bot credentials for the Telegram chat that receives notifications.
#[derive(Clone)]
pub struct TelegramCredentials {
    pub bot_token: String,
    pub chat_id: String,
}

/// Result of a notification attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The message was accepted by the endpoint.
    Sent,
    /// No credentials are configured, so nothing was sent.
    Skipped,
}

#[derive(Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Service delivering application summaries to Telegram.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool between clones, so a clone
/// can be moved into a spawned task.
#[derive(Clone)]
pub struct ApplicationNotifier {
    /// HTTP client used for Bot API calls
    http: reqwest::Client,
    /// Bot API base URL, without trailing slash
    api_url: String,
    /// `None` turns every notification into a no-op
    credentials: Option<TelegramCredentials>,
}

impl ApplicationNotifier {
    /// Creates a new ApplicationNotifier instance.
    ///
    /// # Arguments
    /// - `http` - HTTP client for Bot API requests, carrying any timeout policy
    /// - `api_url` - Bot API base URL (e.g. `https://api.telegram.org`)
    /// - `credentials` - Bot token and chat id, or `None` to disable notifications
    ///
    /// # Returns
    /// - `ApplicationNotifier` - New notifier instance
    pub fn new(
        http: reqwest::Client,
        api_url: impl Into<String>,
        credentials: Option<TelegramCredentials>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Posts the summary of a stored application to the configured chat.
    ///
    /// Makes a single `sendMessage` call; there is no retry.
    ///
    /// # Arguments
    /// - `application` - The application that was just persisted
    ///
    /// # Returns
    /// - `Ok(NotifyOutcome::Sent)` - The endpoint accepted the message
    /// - `Ok(NotifyOutcome::Skipped)` - No credentials configured, nothing sent
    /// - `Err(NotifyError::Request)` - Transport failure or timeout
    /// - `Err(NotifyError::Api)` - The endpoint returned a non-success status
    pub async fn notify(&self, application: &Application) -> Result<NotifyOutcome, NotifyError> {
        let Some(credentials) = &self.credentials else {
            return Ok(NotifyOutcome::Skipped);
        };

        let endpoint = format!("{}/bot{}/sendMessage", self.api_url, credentials.bot_token);
        let text = builder::build_message(application);

        let response = self
            .http
            .post(endpoint)
            .json(&SendMessageBody {
                chat_id: &credentials.chat_id,
                text: &text,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(NotifyOutcome::Sent)
    }
}
