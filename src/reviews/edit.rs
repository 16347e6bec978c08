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
use crate::models::Review;
use crate::{policy, AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateReviewBody {
    rating: Option<i64>,
    comment: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn update_review(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(body): Json<UpdateReviewBody>,
) -> ApiResult<impl IntoResponse> {
    if body.rating.is_none() && body.comment.is_none() {
        return Err(ApiError::Validation(
            "At least one field (rating or comment) is required".into(),
        ));
    }

    if let Some(rating) = body.rating {
        if !(1..=5).contains(&rating) {
            return Err(ApiError::Validation("Rating must be between 1 and 5".into()));
        }
    }

    let Some(review) = Review::find_by_id(&db_pool, id).await? else {
        return Err(ApiError::NotFound("Review"));
    };

    policy::edit_review(&user, &review, "update")?;

    let review = Review::update(&db_pool, id, body.rating, body.comment.as_deref()).await?;

    Ok(Json(json!({
        "message": "Review updated successfully",
        "review": review,
    })))
}

#[debug_handler(state = AppState)]
pub(crate) async fn delete_review(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let Some(review) = Review::find_by_id(&db_pool, id).await? else {
        return Err(ApiError::NotFound("Review"));
    };

    policy::edit_review(&user, &review, "delete")?;

    Review::delete(&db_pool, id).await?;

    Ok(Json(json!({ "message": "Review deleted successfully" })))
}
