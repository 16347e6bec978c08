use axum::{
    debug_handler,
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use sqlx::SqlitePool;

use crate::error::ApiResult;
use crate::models::Review;

// Reviews are globally readable; an unknown id just yields an empty list.

#[debug_handler]
pub(crate) async fn reviews_by_hostel(
    State(db_pool): State<SqlitePool>,
    Path(hostel_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let reviews = Review::find_by_hostel(&db_pool, hostel_id).await?;
    Ok(Json(reviews))
}

#[debug_handler]
pub(crate) async fn reviews_by_student(
    State(db_pool): State<SqlitePool>,
    Path(student_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let reviews = Review::find_by_student(&db_pool, student_id).await?;
    Ok(Json(reviews))
}
