//! Discord REST API access with the bot credential.

pub mod channel;
pub mod guild;

use serde::Serialize;

use crate::error::AppError;

pub(crate) const DISCORD_API_URL: &str = "https://discord.com/api/v10";

/// Bot-credential client for the Discord REST API.
///
/// Every response body is read as text before any parsing, because Discord's
/// error bodies are not guaranteed to be JSON and a parse failure on an error
/// path must not mask the original status code. Callers classify the
/// `ApiResponse` themselves.
#[derive(Clone)]
pub struct DiscordApi {
    client: reqwest::Client,
    bot_token: String,
    base_url: String,
}

/// Status and raw body of a Discord API response.
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl DiscordApi {
    pub fn new(client: reqwest::Client, bot_token: String) -> Self {
        Self {
            client,
            bot_token,
            base_url: DISCORD_API_URL.to_string(),
        }
    }

    /// Overrides the API base URL. Used by tests to point at a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues an authenticated GET and returns the status with the raw body.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, AppError> {
        let response = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bot {}", self.bot_token))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }

    /// Issues an authenticated JSON POST and returns the status with the
    /// raw body.
    pub async fn post_json<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<ApiResponse, AppError> {
        let response = self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Bot {}", self.bot_token))
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
