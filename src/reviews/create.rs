use axum::{
    debug_handler,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::models::{Hostel, Review, Role};
use crate::{policy, AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct CreateReviewBody {
    hostel_id: Option<i64>,
    rating: Option<i64>,
    comment: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn create_review(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Json(body): Json<CreateReviewBody>,
) -> ApiResult<impl IntoResponse> {
    policy::require_role(&user, Role::Student, "create reviews")?;

    let (Some(hostel_id), Some(rating)) = (body.hostel_id, body.rating) else {
        return Err(ApiError::Validation("hostel_id and rating are required".into()));
    };

    if !(1..=5).contains(&rating) {
        return Err(ApiError::Validation("Rating must be between 1 and 5".into()));
    }

    let Some(hostel) = Hostel::find_by_id(&db_pool, hostel_id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    policy::require_verified(&hostel.hostel, "review")?;

    let review = Review::create(
        &db_pool,
        rating,
        body.comment.as_deref().unwrap_or(""),
        hostel_id,
        user.id,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Review created successfully",
            "review": review,
        })),
    ))
}
