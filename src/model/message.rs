//! Embed drafts and their normalized wire forms.
//!
//! `EmbedDraft` is the loosely-typed shape the dashboard submits: every field
//! optional, color as a hex string. `NormalizedEmbed` is the size-bounded,
//! type-correct shape Discord accepts. Absent and empty fields are omitted
//! from the wire form entirely, because Discord treats a missing field
//! differently from an empty string.

use serde::{Deserialize, Serialize};

/// User-supplied embed draft before normalization.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EmbedDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Color as a hex string, with or without a leading `#`.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Validated, length-capped embed ready for transmission to Discord.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NormalizedEmbed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 24-bit color integer parsed from the draft's hex string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
}

impl NormalizedEmbed {
    /// True when every field was dropped during normalization.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Discord's footer object. Only the text field is used.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
}

/// Discord's media object, shared by thumbnail and image.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EmbedMedia {
    pub url: String,
}

/// The complete message payload sent to Discord in one call.
#[derive(Serialize, Debug, Clone)]
pub struct OutboundMessage {
    pub content: String,
    pub embeds: Vec<NormalizedEmbed>,
}
