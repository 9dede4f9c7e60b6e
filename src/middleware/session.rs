//! Type-safe session management wrappers.
//!
//! Session access is split by concern so handlers never touch raw string
//! keys: `AuthSession` holds the authenticated identity and the authorized
//! guild set computed at login, `CsrfSession` holds the one-shot CSRF token
//! for the OAuth flow. Both wrap the same underlying `Session` but expose
//! only the methods relevant to their concern.

use tower_sessions::Session;

use crate::{
    error::AppError,
    model::discord::{DiscordUser, GuildMembership},
};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_ACCESS_TOKEN: &str = "auth:access_token";
const SESSION_AUTH_GUILDS: &str = "auth:guilds";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Holds the logged-in Discord user and their authorized guild set. The
/// guild set is written once at login completion and replaced wholesale on
/// the next login, never patched in place.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated user after a successful OAuth callback.
    pub async fn set_user(&self, user: &DiscordUser) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the authenticated user, if any.
    pub async fn get_user(&self) -> Result<Option<DiscordUser>, AppError> {
        let user = self.session.get::<DiscordUser>(SESSION_AUTH_USER).await?;
        Ok(user)
    }

    /// Stores the user's short-lived Discord bearer token.
    ///
    /// Held only here, never to disk; cleared with the rest of the session
    /// at logout or expiry.
    pub async fn set_access_token(&self, token: &str) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_ACCESS_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves the user's Discord bearer token, if logged in.
    pub async fn get_access_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.get::<String>(SESSION_AUTH_ACCESS_TOKEN).await?;
        Ok(token)
    }

    /// Stores the authorized guild set computed at login.
    ///
    /// The set must already be filtered to guilds where the administrative
    /// predicate holds; it is the only data later authorization checks
    /// consult.
    pub async fn set_guilds(&self, guilds: &[GuildMembership]) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_GUILDS, guilds).await?;
        Ok(())
    }

    /// Retrieves the authorized guild set, empty when none was stored.
    pub async fn get_guilds(&self) -> Result<Vec<GuildMembership>, AppError> {
        let guilds = self
            .session
            .get::<Vec<GuildMembership>>(SESSION_AUTH_GUILDS)
            .await?
            .unwrap_or_default();
        Ok(guilds)
    }

    /// Clears all session data. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management for the OAuth flow.
///
/// The token is stored during login initiation and consumed exactly once
/// during the callback, so a token can never be replayed.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token for validation during the OAuth callback.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
