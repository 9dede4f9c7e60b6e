//! Guild membership filtering.

use crate::model::discord::GuildMembership;

/// Returns the memberships where the caller administers the guild.
///
/// Pure and total: applies the administrative predicate to each membership,
/// preserving relative order. A missing permission bitmask counts as no
/// permissions, never as an error. Used to build the session's authorized
/// guild set at login; the auth guard re-applies the same predicate per
/// request.
pub fn filter_administered(memberships: Vec<GuildMembership>) -> Vec<GuildMembership> {
    memberships
        .into_iter()
        .filter(GuildMembership::is_administrator)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(id: &str, owner: bool, permissions: Option<u64>) -> GuildMembership {
        GuildMembership {
            id: id.to_string(),
            name: format!("Guild {}", id),
            icon: None,
            owner,
            permissions,
        }
    }

    /// Tests a membership is kept iff owner or the ADMINISTRATOR bit is set,
    /// with missing permissions treated as zero.
    ///
    /// Expected: owner and bit-0x8 guilds kept, the rest dropped
    #[test]
    fn keeps_only_administered_guilds() {
        let memberships = vec![
            membership("1", true, None),
            membership("2", false, Some(0x8)),
            membership("3", false, Some(0x400)),
            membership("4", false, None),
            membership("5", false, Some(0x8 | 0x400)),
        ];

        let filtered = filter_administered(memberships);
        let ids: Vec<&str> = filtered.iter().map(|g| g.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2", "5"]);
    }

    /// Tests relative order of the input is preserved.
    ///
    /// Expected: output order matches input order
    #[test]
    fn preserves_input_order() {
        let memberships = vec![
            membership("9", false, Some(0x8)),
            membership("3", true, None),
            membership("7", false, Some(0x8)),
        ];

        let filtered = filter_administered(memberships);
        let ids: Vec<&str> = filtered.iter().map(|g| g.id.as_str()).collect();

        assert_eq!(ids, vec!["9", "3", "7"]);
    }

    /// Tests the empty input maps to empty output.
    ///
    /// Expected: empty vec
    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_administered(Vec::new()).is_empty());
    }
}
