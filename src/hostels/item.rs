use axum::{
    debug_handler,
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::models::Hostel;
use crate::{policy, AppState};

#[debug_handler(state = AppState)]
pub(crate) async fn get_hostel(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let Some(hostel) = Hostel::find_by_id(&db_pool, id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    policy::view_hostel(&user, &hostel.hostel)?;

    Ok(Json(hostel))
}
