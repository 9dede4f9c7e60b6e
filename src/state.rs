//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request
//! handler through Axum's state extraction. All fields are cheap to clone:
//! `reqwest::Client` and `DiscordApi` share their connection pool internally
//! and the OAuth2 client is designed to be cloned.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};

use crate::service::discord::DiscordApi;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// HTTP client for user-scoped Discord requests (token exchange, profile
    /// and guild fetches with the user's bearer token).
    ///
    /// Configured with redirects disabled to prevent SSRF via the external
    /// API responses.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord login flow.
    pub oauth_client: OAuth2Client,

    /// Bot-credential Discord API client for guild-scoped operations
    /// (channel listing, message dispatch). The credential is process-wide
    /// and read-only at request time.
    pub discord_api: DiscordApi,

    /// Application base URL, used for post-login redirects.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_api: DiscordApi,
        app_url: String,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            discord_api,
            app_url,
        }
    }
}
