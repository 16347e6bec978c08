use axum::{
    debug_handler,
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::models::{Enquiry, Hostel, Role};
use crate::{policy, AppState};

/// Every enquiry across the requester's hostels.
#[debug_handler(state = AppState)]
pub(crate) async fn enquiries_by_owner(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    policy::require_role(&user, Role::Owner, "view enquiries")?;

    let enquiries = Enquiry::find_by_owner(&db_pool, user.id).await?;
    Ok(Json(enquiries))
}

#[debug_handler(state = AppState)]
pub(crate) async fn enquiries_by_student(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    policy::require_role(&user, Role::Student, "view their enquiries")?;

    let enquiries = Enquiry::find_by_student(&db_pool, user.id).await?;
    Ok(Json(enquiries))
}

#[debug_handler(state = AppState)]
pub(crate) async fn enquiries_by_hostel(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(hostel_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let Some(hostel) = Hostel::find_by_id(&db_pool, hostel_id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    policy::view_hostel_enquiries(&user, &hostel.hostel)?;

    let enquiries = Enquiry::find_by_hostel(&db_pool, hostel_id).await?;
    Ok(Json(enquiries))
}
