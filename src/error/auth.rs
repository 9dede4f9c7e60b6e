use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user attached to the session.
    ///
    /// Results in a redirect to the login flow rather than a bare 401, since
    /// every privileged page is reachable only through Discord SSO.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The user is not an administrator of the target guild.
    ///
    /// The administrative predicate (owner or ADMINISTRATOR permission bit)
    /// failed for the guild, or the guild is absent from the session's
    /// authorized set. Short-circuits before any Discord call is made.
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} is not an administrator of guild {guild_id}")]
    GuildAccessDenied { user_id: String, guild_id: String },

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the
    /// token stored in the session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
}

/// Converts authentication errors into HTTP responses.
///
/// Denials are logged at debug level for diagnostics while client-facing
/// messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => Redirect::temporary("/api/auth/login").into_response(),
            Self::GuildAccessDenied { user_id, guild_id } => {
                tracing::debug!(
                    "Denied guild access for user {} on guild {}",
                    user_id,
                    guild_id
                );
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new("forbidden").with_detail(
                        "You do not have administrator access to this server.".to_string(),
                    )),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("bad_request").with_detail(
                    "There was an issue logging you in, please try again.".to_string(),
                )),
            )
                .into_response(),
        }
    }
}
