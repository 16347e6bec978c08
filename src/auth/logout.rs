use axum::{debug_handler, response::IntoResponse, Json};
use serde_json::json;
use tower_sessions::Session;

use crate::error::ApiResult;

#[debug_handler]
pub(crate) async fn logout(session: Session) -> ApiResult<impl IntoResponse> {
    session.flush().await?;
    Ok(Json(json!({ "message": "Logged out successfully" })))
}
