use axum::{debug_handler, extract::State, response::IntoResponse, Json};
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::models::{Booking, Role};
use crate::{policy, AppState};

#[debug_handler(state = AppState)]
pub(crate) async fn bookings_by_student(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    policy::require_role(&user, Role::Student, "view their bookings")?;

    let bookings = Booking::find_by_student(&db_pool, user.id).await?;
    Ok(Json(bookings))
}
