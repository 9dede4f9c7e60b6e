use serde::{Deserialize, Serialize};

use crate::model::message::EmbedDraft;

/// Structured error body returned by every failure path.
///
/// `error` is a stable machine-readable tag (`bad_request`, `forbidden`,
/// `discord_error`, `bad_gateway`, `server_error`). For relayed Discord
/// failures, `status` carries Discord's status code and `detail` the raw
/// response body verbatim.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorDto {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            status: None,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// Minimal channel projection exposed to the dashboard dropdowns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChannelDto {
    pub id: String,
    pub name: String,
}

/// Request body for `POST /api/send-message`.
///
/// `channel_id` defaults to empty when the field is missing so the handler
/// can report a single `bad_request` instead of a deserialization failure.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDto {
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub embeds: Option<Vec<EmbedDraft>>,
}

/// Response body for a successful send.
///
/// `message_id` is best-effort diagnostics: a 2xx from Discord with an
/// unparseable body still counts as success, just without an id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendResultDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}
