use axum::{debug_handler, extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::error::{ApiError, ApiResult};
use crate::models::User;
use crate::session::USER_ID;

#[derive(Debug, Deserialize)]
pub(crate) struct LoginBody {
    email: Option<String>,
    password: Option<String>,
}

#[debug_handler]
pub(crate) async fn login(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Json(body): Json<LoginBody>,
) -> ApiResult<impl IntoResponse> {
    let (Some(email), Some(password)) = (&body.email, &body.password) else {
        return Err(ApiError::Validation("Email and password are required".into()));
    };

    let Some(user) = User::find_by_email(&db_pool, email).await? else {
        return Err(ApiError::InvalidCredentials);
    };

    if user.password != *password {
        return Err(ApiError::InvalidCredentials);
    }

    session.insert(USER_ID, user.id).await?;
    log::info!("login: {} ({})", user.email, user.role.as_str());

    Ok(Json(json!({
        "message": "Login successful",
        "user": user,
    })))
}
