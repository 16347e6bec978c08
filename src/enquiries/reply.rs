use axum::{
    debug_handler,
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::models::{Enquiry, Hostel};
use crate::{policy, AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct ReplyBody {
    reply: Option<String>,
}

/// The pending -> responded transition. Replying to an already-responded
/// enquiry overwrites the previous reply.
#[debug_handler(state = AppState)]
pub(crate) async fn reply_to_enquiry(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(body): Json<ReplyBody>,
) -> ApiResult<impl IntoResponse> {
    let reply = body.reply.as_deref().map(str::trim).unwrap_or("");
    if reply.is_empty() {
        return Err(ApiError::Validation("Reply message is required".into()));
    }

    let Some(enquiry) = Enquiry::find_by_id(&db_pool, id).await? else {
        return Err(ApiError::NotFound("Enquiry"));
    };

    let Some(hostel) = Hostel::find_by_id(&db_pool, enquiry.hostel_id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    policy::reply_enquiry(&user, &hostel.hostel)?;

    let enquiry = Enquiry::reply(&db_pool, id, reply).await?;

    Ok(Json(json!({
        "message": "Reply sent successfully",
        "enquiry": enquiry,
    })))
}
