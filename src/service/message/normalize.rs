//! Embed draft normalization.
//!
//! Total and permissive on purpose: over-long fields are truncated rather
//! than rejected and a malformed color is dropped rather than failing the
//! message, so borderline input still sends. The dashboard warns about
//! truncation separately.

use crate::model::message::{EmbedDraft, EmbedFooter, EmbedMedia, NormalizedEmbed};

/// Discord's per-field character caps for embeds.
const TITLE_MAX_CHARS: usize = 256;
const DESCRIPTION_MAX_CHARS: usize = 4096;
const FOOTER_MAX_CHARS: usize = 2048;

/// Normalizes a draft into a conformant embed.
///
/// Per field: text is truncated to its character cap; the color hex string
/// (with or without a leading `#`) is parsed base-16 and omitted when it
/// does not parse; thumbnail and image are wrapped as `{url}` without local
/// URL validation, since Discord rejects malformed URLs itself. Empty
/// strings count as absent. Pure and idempotent.
pub fn normalize(draft: &EmbedDraft) -> NormalizedEmbed {
    NormalizedEmbed {
        title: capped_text(&draft.title, TITLE_MAX_CHARS),
        description: capped_text(&draft.description, DESCRIPTION_MAX_CHARS),
        color: draft.color.as_deref().and_then(parse_color),
        footer: capped_text(&draft.footer, FOOTER_MAX_CHARS).map(|text| EmbedFooter { text }),
        thumbnail: present(&draft.thumbnail).map(|url| EmbedMedia { url }),
        image: present(&draft.image).map(|url| EmbedMedia { url }),
    }
}

/// Normalizes a draft list, preserving 1:1 index alignment.
///
/// A draft whose every field drops out still yields an (empty) embed object
/// so the dashboard's per-embed editing UI can map entries back to inputs.
/// Callers that want to omit empty embeds filter afterwards.
pub fn normalize_all(drafts: &[EmbedDraft]) -> Vec<NormalizedEmbed> {
    drafts.iter().map(normalize).collect()
}

fn present(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn capped_text(field: &Option<String>, max_chars: usize) -> Option<String> {
    present(field).map(|value| {
        if value.chars().count() > max_chars {
            value.chars().take(max_chars).collect()
        } else {
            value
        }
    })
}

/// Parses a `#RRGGBB` or bare hex string into a color integer.
///
/// Returns None when the string does not parse as base-16; the caller omits
/// the color rather than defaulting to black.
fn parse_color(raw: &str) -> Option<u32> {
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    u32::from_str_radix(hex, 16).ok()
}
