use oauth2::{AuthorizationCode, TokenResponse};

use crate::{
    error::AppError,
    model::discord::{DiscordUser, GuildMembership},
    service::{
        auth::DiscordAuthService,
        discord::{guild, DISCORD_API_URL},
    },
};

/// Everything the session needs after a completed login: the identity, the
/// guilds the user administers, and the user's short-lived bearer token.
pub struct LoginOutcome {
    pub user: DiscordUser,
    pub guilds: Vec<GuildMembership>,
    pub access_token: String,
}

impl<'a> DiscordAuthService<'a> {
    /// Completes the OAuth flow after Discord redirects back.
    ///
    /// Exchanges the authorization code for a user token, fetches the user's
    /// profile and guild memberships with it, and filters the memberships
    /// down to the guilds where the administrative predicate holds. The
    /// returned set is what the caller stores as the session's authorized
    /// guild set.
    pub async fn callback(&self, authorization_code: String) -> Result<LoginOutcome, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AppError::InternalError(format!("OAuth code exchange failed: {}", e)))?;

        let access_token = token.access_token().secret().clone();

        let user = self.fetch_discord_user(&access_token).await?;
        let memberships = self.fetch_user_guilds(&access_token).await?;
        let guilds = guild::filter_administered(memberships);

        tracing::info!(
            "User {} logged in with {} administered guild(s)",
            user.id,
            guilds.len()
        );

        Ok(LoginOutcome {
            user,
            guilds,
            access_token,
        })
    }

    /// Retrieves the user's profile with their bearer token.
    async fn fetch_discord_user(&self, access_token: &str) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(format!("{}/users/@me", DISCORD_API_URL))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }

    /// Retrieves the user's guild memberships with their bearer token.
    async fn fetch_user_guilds(&self, access_token: &str) -> Result<Vec<GuildMembership>, AppError> {
        let guilds = self
            .http_client
            .get(format!("{}/users/@me/guilds", DISCORD_API_URL))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<Vec<GuildMembership>>()
            .await?;

        Ok(guilds)
    }
}
