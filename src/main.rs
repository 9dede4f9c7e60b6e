mod config;
mod controller;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::discord::DiscordApi, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client();
    let oauth_client = startup::setup_oauth_client(&config)?;
    let session_layer = startup::setup_session_layer();
    let discord_api = DiscordApi::new(http_client.clone(), config.bot_token.clone());

    tracing::info!("Starting server on {}", config.bind_address);

    let state = AppState::new(http_client, oauth_client, discord_api, config.app_url.clone());

    let router = router::router()
        .with_state(state)
        .layer(session_layer)
        .layer(startup::setup_cors_layer(&config.app_url));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
