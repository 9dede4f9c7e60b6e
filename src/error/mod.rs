//! Error types and HTTP response handling.
//!
//! Provides the application's error hierarchy and the conversion logic for
//! transforming errors into structured JSON responses. The `AppError` enum is
//! the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so handlers can simply return `Result<_, AppError>`.
//!
//! Discord-originated failures are split into two kinds on purpose: a non-2xx
//! response with a body is a semantic rejection (`Discord`), while a response
//! body that fails to parse as the expected structure is a contract breach
//! (`BadGateway`). Callers and clients can tell the two apart.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure errors use `#[from]`
/// for automatic conversion; `AuthError` handles its own response mapping.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status mapping
    /// (login redirect, 403 Forbidden, etc.).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    ///
    /// The request to Discord never completed (connect failure, timeout).
    /// Distinct from `Discord`, where Discord answered with a rejection.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error, e.g. binding the listener at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Discord rejected a request with a non-2xx status.
    ///
    /// Carries Discord's status code and the raw response body verbatim so
    /// the caller can log or display the real reason. Never retried.
    #[error("Discord returned status {status}")]
    Discord { status: u16, detail: String },

    /// Discord returned a 2xx or otherwise well-formed response whose body
    /// did not parse as the expected structure.
    ///
    /// Indicates a provider contract breach rather than a rejected request,
    /// so it maps to 502 Bad Gateway instead of relaying a status.
    #[error("Discord response body could not be parsed")]
    BadGateway,

    /// Invalid request from the caller, reported before any Discord call.
    ///
    /// Results in 400 Bad Request with the message as `detail`.
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected local fault. The message is logged server-side and a
    /// generic `server_error` body is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Discord rejections relay the upstream status and body as `detail`; all
/// unexpected local faults are logged and collapsed into a generic 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Discord { status, detail } => {
                let status_code =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status_code,
                    Json(ErrorDto {
                        error: "discord_error".to_string(),
                        status: Some(status),
                        detail: Some(detail),
                    }),
                )
                    .into_response()
            }
            Self::BadGateway => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorDto::new("bad_gateway")),
            )
                .into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("bad_request").with_detail(msg)),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("server_error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message server-side and returns a generic
/// `server_error` body so internal details are not leaked to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("server_error")),
        )
            .into_response()
    }
}
