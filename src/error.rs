use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level failure taxonomy. Every handler returns `ApiResult<T>`,
/// and the boundary translation to a status code lives here and only here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Database error")]
    Database(#[from] sqlx::Error),
    #[error("Session error")]
    Session(#[from] tower_sessions::session::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Driver errors keep their message in `details`; everything else is
        // already phrased for the caller.
        let details = match &self {
            ApiError::Database(err) => Some(err.to_string()),
            ApiError::Session(err) => Some(err.to_string()),
            _ => None,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("{self}: {}", details.as_deref().unwrap_or("?"));
        }

        let body = Json(ErrorBody {
            error: self.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
