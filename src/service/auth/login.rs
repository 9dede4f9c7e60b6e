use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::service::auth::DiscordAuthService;

impl<'a> DiscordAuthService<'a> {
    /// Builds the Discord authorize URL for the login flow.
    ///
    /// Requests the `identify` and `guilds` scopes: the first to read the
    /// user's profile, the second to list their guild memberships for the
    /// authorized guild set.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url();

        (authorize_url, csrf_state)
    }
}
