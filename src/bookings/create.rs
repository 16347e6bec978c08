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
use crate::models::{Booking, Hostel, Role};
use crate::{policy, AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct CreateBookingBody {
    hostel_id: Option<i64>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn create_booking(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Json(body): Json<CreateBookingBody>,
) -> ApiResult<impl IntoResponse> {
    policy::require_role(&user, Role::Student, "create bookings")?;

    let Some(hostel_id) = body.hostel_id else {
        return Err(ApiError::Validation("hostel_id is required".into()));
    };

    let Some(hostel) = Hostel::find_by_id(&db_pool, hostel_id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    policy::require_verified(&hostel.hostel, "book")?;

    let booking = Booking::create(&db_pool, hostel_id, user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Booking request sent successfully",
            "booking": booking,
        })),
    ))
}
