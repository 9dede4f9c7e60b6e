use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::api::{SendMessageDto, SendResultDto},
    service::message::{dispatch::MessageService, normalize},
    state::AppState,
};

/// Sends a composed message into a channel via the bot credential.
///
/// The draft embeds are normalized (truncated, color-parsed) before the
/// single Discord call; normalization never fails, so a borderline draft
/// still sends. Discord's own rejections come back as `discord_error` with
/// the original status and body.
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session).require_user().await?;

    let embeds = normalize::normalize_all(body.embeds.as_deref().unwrap_or_default());

    let result = MessageService::new(&state.discord_api)
        .send(&body.channel_id, body.content, embeds)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SendResultDto {
            success: true,
            message_id: result.message_id,
        }),
    ))
}
