//! Construction of shared infrastructure at startup.
//!
//! Builds the reqwest client, the OAuth2 client for Discord SSO, the session
//! layer, and the CORS layer. Sessions use an in-memory store: nothing in
//! this application persists, so a restart simply asks users to log in again.

use axum::http::{HeaderValue, Method};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::time::Duration, Expiry, MemoryStore, SessionManagerLayer};

use crate::{config::Config, error::AppError, state::OAuth2Client};

/// Builds the HTTP client used for all outbound requests.
///
/// Redirects are disabled so a malicious or misbehaving response cannot
/// bounce an authenticated request to an unexpected host.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Builds the OAuth2 client for Discord authentication from configuration.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid Discord auth URL: {}", e)))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid Discord token URL: {}", e)))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|e| AppError::InternalError(format!("Invalid redirect URL: {}", e)))?;

    Ok(
        BasicClient::new(ClientId::new(config.discord_client_id.clone()))
            .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url),
    )
}

/// Builds the session layer backed by an in-memory store.
pub fn setup_session_layer() -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::hours(12)))
}

/// Builds the CORS layer scoped to the application's own origin.
pub fn setup_cors_layer(app_url: &str) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true);

    if let Ok(origin) = app_url.parse::<HeaderValue>() {
        layer = layer.allow_origin(origin);
    }

    layer
}
