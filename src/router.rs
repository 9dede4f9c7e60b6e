use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{
        auth::{callback, get_user, login, logout},
        discord::{get_channels, get_guilds},
        message::send_message,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/guilds", get(get_guilds))
        .route("/api/channels/{guild_id}", get(get_channels))
        .route("/api/send-message", post(send_message))
}
