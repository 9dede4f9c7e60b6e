//! Message dispatch to Discord.

use serde::Deserialize;

use crate::{
    error::AppError,
    model::message::{NormalizedEmbed, OutboundMessage},
    service::discord::DiscordApi,
};

/// The slice of Discord's create-message response this service cares about.
#[derive(Deserialize)]
struct CreatedMessage {
    id: String,
}

/// Outcome of a successful dispatch.
///
/// `message_id` is None when Discord accepted the message but returned a
/// body the id could not be read from; the send still happened.
#[derive(Debug, PartialEq)]
pub struct DispatchResult {
    pub message_id: Option<String>,
}

pub struct MessageService<'a> {
    discord_api: &'a DiscordApi,
}

impl<'a> MessageService<'a> {
    pub fn new(discord_api: &'a DiscordApi) -> Self {
        Self { discord_api }
    }

    /// Sends one message to a channel: at most one Discord call, no retry.
    ///
    /// An empty `channel_id` is a caller error and is rejected before any
    /// Discord call. Content defaults to the empty string. Discord's rule
    /// that at least one of content/embeds must be non-empty is not
    /// duplicated locally; an empty combination goes through and Discord's
    /// rejection is relayed.
    ///
    /// # Returns
    /// - `Ok(DispatchResult)` - Discord accepted the message; the id is
    ///   extracted best-effort
    /// - `Err(AppError::BadRequest)` - Missing channel id, nothing sent
    /// - `Err(AppError::Discord)` - Discord rejected the message; status and
    ///   body relayed verbatim
    pub async fn send(
        &self,
        channel_id: &str,
        content: Option<String>,
        embeds: Vec<NormalizedEmbed>,
    ) -> Result<DispatchResult, AppError> {
        if channel_id.is_empty() {
            return Err(AppError::BadRequest("channelId missing".to_string()));
        }

        let payload = OutboundMessage {
            content: content.unwrap_or_default(),
            embeds,
        };

        let response = self
            .discord_api
            .post_json(&format!("/channels/{}/messages", channel_id), &payload)
            .await?;

        if !response.is_success() {
            tracing::error!(
                "Discord rejected message for channel {}: {} {}",
                channel_id,
                response.status,
                response.body
            );
            return Err(AppError::Discord {
                status: response.status,
                detail: response.body,
            });
        }

        // The send happened; id extraction is diagnostics only.
        let message_id = serde_json::from_str::<CreatedMessage>(&response.body)
            .map(|message| message.id)
            .ok();

        Ok(DispatchResult { message_id })
    }
}
