use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    service::discord::channel::ChannelService,
    state::AppState,
};

/// Lists the guilds the logged-in user administers.
///
/// Served straight from the session's authorized guild set, which was
/// filtered at login; no Discord call is made.
pub async fn get_guilds(session: Session) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session).require_user().await?;

    let guilds = AuthSession::new(&session).get_guilds().await?;

    Ok((StatusCode::OK, Json(guilds)))
}

/// Lists the text channels of a guild the user administers.
///
/// The guild check short-circuits before the Discord call: a caller who does
/// not administer the guild gets a 403 and Discord is never contacted.
pub async fn get_channels(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require_guild_admin(&guild_id)
        .await?;

    let channels = ChannelService::new(&state.discord_api)
        .list_text_channels(&guild_id)
        .await?;

    Ok((StatusCode::OK, Json(channels)))
}
