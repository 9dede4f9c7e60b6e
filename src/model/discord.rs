//! Discord-side domain models.
//!
//! Wire shapes for the Discord API objects this application consumes: the
//! authenticated user, the user's guild memberships, and guild channels.
//! Snowflake ids stay as strings end to end; only the permission bitmask is
//! parsed into an integer, since the administrative predicate needs it.

use serde::{Deserialize, Deserializer, Serialize};

/// The ADMINISTRATOR permission bit in Discord's permission bitmask.
pub const ADMINISTRATOR: u64 = 0x8;

/// Discord's numeric type code for guild text channels.
pub const GUILD_TEXT_CHANNEL: u8 = 0;

/// The authenticated Discord user, as returned by `/users/@me`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// One guild the user belongs to, as returned by `/users/@me/guilds`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GuildMembership {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    /// Permission bitmask for the user in this guild. Discord serializes it
    /// as a decimal string; older payloads used a plain number. A missing or
    /// unparseable value counts as no permissions, never as an error.
    #[serde(default, deserialize_with = "deserialize_permissions")]
    pub permissions: Option<u64>,
}

impl GuildMembership {
    /// The administrative predicate: guild owner, or the ADMINISTRATOR bit
    /// set in the permission bitmask.
    ///
    /// This is the single source of truth for whether the user may manage
    /// the guild's messaging. Recomputed wherever needed rather than cached
    /// as a boolean, so permission changes on Discord's side take effect on
    /// the next guild fetch.
    pub fn is_administrator(&self) -> bool {
        self.owner || (self.permissions.unwrap_or(0) & ADMINISTRATOR) == ADMINISTRATOR
    }
}

/// A guild channel, as returned by `/guilds/{id}/channels`.
///
/// Only `GUILD_TEXT_CHANNEL` entries are exposed to callers; everything else
/// (voice, category, forum, ...) is filtered out.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GuildChannel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    /// Position in the guild's channel list. Channels without a position
    /// sort as position 0.
    #[serde(default)]
    pub position: Option<i64>,
}

/// Accepts the permission bitmask as either a decimal string or a number.
fn deserialize_permissions<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(bits)) => Some(bits),
        Some(Raw::Text(text)) => text.parse::<u64>().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the permission bitmask deserializes from Discord's current
    /// string encoding.
    ///
    /// Expected: permissions parsed to the numeric bitmask
    #[test]
    fn parses_permissions_from_string() {
        let guild: GuildMembership =
            serde_json::from_str(r#"{"id": "1", "name": "Test", "permissions": "2147483647"}"#)
                .unwrap();
        assert_eq!(guild.permissions, Some(2147483647));
    }

    /// Tests the permission bitmask deserializes from the legacy numeric
    /// encoding.
    ///
    /// Expected: permissions taken as-is
    #[test]
    fn parses_permissions_from_number() {
        let guild: GuildMembership =
            serde_json::from_str(r#"{"id": "1", "name": "Test", "permissions": 8}"#).unwrap();
        assert_eq!(guild.permissions, Some(8));
    }

    /// Tests a missing permissions field deserializes as None and counts as
    /// non-administrative.
    ///
    /// Expected: permissions None, is_administrator false
    #[test]
    fn missing_permissions_are_none() {
        let guild: GuildMembership =
            serde_json::from_str(r#"{"id": "1", "name": "Test"}"#).unwrap();
        assert_eq!(guild.permissions, None);
        assert!(!guild.is_administrator());
    }

    /// Tests the administrative predicate on each branch: ownership alone,
    /// the ADMINISTRATOR bit alone, and neither.
    ///
    /// Expected: owner true or bit 0x8 set grants admin, otherwise denied
    #[test]
    fn administrative_predicate() {
        let owner = GuildMembership {
            id: "1".to_string(),
            name: "Owned".to_string(),
            icon: None,
            owner: true,
            permissions: Some(0),
        };
        assert!(owner.is_administrator());

        let admin = GuildMembership {
            owner: false,
            permissions: Some(0x8 | 0x400),
            ..owner.clone()
        };
        assert!(admin.is_administrator());

        let member = GuildMembership {
            owner: false,
            permissions: Some(0x400),
            ..owner
        };
        assert!(!member.is_administrator());
    }
}
