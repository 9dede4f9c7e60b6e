//! Request authorization guard.
//!
//! Every privileged handler goes through `AuthGuard` before doing anything
//! else. The guard is the only barrier preventing a user from reading or
//! sending into a guild they do not administer, so guild checks re-apply the
//! administrative predicate to the stored membership record on every request
//! instead of trusting that the set was filtered correctly at login.

use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::discord::{DiscordUser, GuildMembership},
};

pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires an authenticated user in the session.
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - The logged-in user
    /// - `Err(AuthError::UserNotInSession)` - No identity; the response
    ///   redirects to the login flow
    pub async fn require_user(&self) -> Result<DiscordUser, AppError> {
        let Some(user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        Ok(user)
    }

    /// Requires an authenticated user who administers the given guild.
    ///
    /// Looks the guild up in the session's authorized set and re-applies the
    /// administrative predicate to the stored membership. Fails closed: a
    /// guild missing from the set and a membership that no longer satisfies
    /// the predicate are both denied, with no Discord call attempted.
    ///
    /// # Returns
    /// - `Ok((DiscordUser, GuildMembership))` - The user and the membership
    ///   for the target guild
    /// - `Err(AuthError::UserNotInSession)` - No identity in the session
    /// - `Err(AuthError::GuildAccessDenied)` - Predicate failed locally
    pub async fn require_guild_admin(
        &self,
        guild_id: &str,
    ) -> Result<(DiscordUser, GuildMembership), AppError> {
        let user = self.require_user().await?;

        let guilds = AuthSession::new(self.session).get_guilds().await?;
        let membership = guilds
            .into_iter()
            .find(|guild| guild.id == guild_id)
            .filter(GuildMembership::is_administrator);

        let Some(membership) = membership else {
            return Err(AuthError::GuildAccessDenied {
                user_id: user.id,
                guild_id: guild_id.to_string(),
            }
            .into());
        };

        Ok((user, membership))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_sessions::{MemoryStore, Session};

    use std::sync::Arc;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn user() -> DiscordUser {
        DiscordUser {
            id: "42".to_string(),
            username: "tester".to_string(),
            global_name: None,
            avatar: None,
        }
    }

    fn membership(id: &str, owner: bool, permissions: Option<u64>) -> GuildMembership {
        GuildMembership {
            id: id.to_string(),
            name: format!("Guild {}", id),
            icon: None,
            owner,
            permissions,
        }
    }

    /// Tests an authenticated admin of the target guild passes the guard.
    ///
    /// Expected: Ok with the user and the stored membership
    #[tokio::test]
    async fn grants_access_to_guild_admin() -> Result<(), AppError> {
        let session = session();
        let auth_session = AuthSession::new(&session);
        auth_session.set_user(&user()).await?;
        auth_session
            .set_guilds(&[membership("100", false, Some(0x8))])
            .await?;

        let guard = AuthGuard::new(&session);
        let (user, guild) = guard.require_guild_admin("100").await?;

        assert_eq!(user.id, "42");
        assert_eq!(guild.id, "100");

        Ok(())
    }

    /// Tests a guild absent from the authorized set is denied before any
    /// Discord call.
    ///
    /// Expected: Err(AuthError::GuildAccessDenied)
    #[tokio::test]
    async fn denies_access_to_unknown_guild() -> Result<(), AppError> {
        let session = session();
        let auth_session = AuthSession::new(&session);
        auth_session.set_user(&user()).await?;
        auth_session
            .set_guilds(&[membership("100", false, Some(0x8))])
            .await?;

        let guard = AuthGuard::new(&session);
        let result = guard.require_guild_admin("200").await;

        match result.unwrap_err() {
            AppError::AuthErr(AuthError::GuildAccessDenied { guild_id, .. }) => {
                assert_eq!(guild_id, "200");
            }
            err => panic!("Expected GuildAccessDenied, got: {:?}", err),
        }

        Ok(())
    }

    /// Tests the predicate is re-applied to the stored membership, so a
    /// record that slipped into the set without admin rights is still denied.
    ///
    /// Expected: Err(AuthError::GuildAccessDenied)
    #[tokio::test]
    async fn denies_access_when_stored_membership_is_not_admin() -> Result<(), AppError> {
        let session = session();
        let auth_session = AuthSession::new(&session);
        auth_session.set_user(&user()).await?;
        auth_session
            .set_guilds(&[membership("100", false, Some(0x400))])
            .await?;

        let guard = AuthGuard::new(&session);
        let result = guard.require_guild_admin("100").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::AuthErr(AuthError::GuildAccessDenied { .. })
        ));

        Ok(())
    }

    /// Tests an unauthenticated request is rejected with the login redirect
    /// error.
    ///
    /// Expected: Err(AuthError::UserNotInSession)
    #[tokio::test]
    async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
        let session = session();

        let guard = AuthGuard::new(&session);
        let result = guard.require_user().await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::AuthErr(AuthError::UserNotInSession)
        ));

        Ok(())
    }

    /// Tests the session round-trips the user's bearer token and clears it
    /// on logout.
    ///
    /// Expected: token present after set, absent after clear
    #[tokio::test]
    async fn access_token_cleared_with_session() -> Result<(), AppError> {
        let session = session();
        let auth_session = AuthSession::new(&session);

        auth_session.set_access_token("user-bearer").await?;
        assert_eq!(
            auth_session.get_access_token().await?,
            Some("user-bearer".to_string())
        );

        auth_session.clear().await;
        assert_eq!(auth_session.get_access_token().await?, None);

        Ok(())
    }
}
