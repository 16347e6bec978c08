use axum::{
    debug_handler,
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::models::{Booking, BookingStatus, Hostel};
use crate::{policy, AppState};

#[debug_handler(state = AppState)]
pub(crate) async fn confirm_booking(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let Some(booking) = Booking::find_by_id(&db_pool, id).await? else {
        return Err(ApiError::NotFound("Booking"));
    };

    let Some(hostel) = Hostel::find_by_id(&db_pool, booking.hostel_id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    policy::confirm_booking(&user, &hostel.hostel)?;

    if booking.status != BookingStatus::Pending {
        return Err(ApiError::Validation(
            "Only pending bookings can be confirmed".into(),
        ));
    }

    let booking = Booking::set_status(&db_pool, id, BookingStatus::Confirmed).await?;

    Ok(Json(json!({
        "message": "Booking confirmed successfully",
        "booking": booking,
    })))
}

#[debug_handler(state = AppState)]
pub(crate) async fn cancel_booking(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let Some(booking) = Booking::find_by_id(&db_pool, id).await? else {
        return Err(ApiError::NotFound("Booking"));
    };

    let Some(hostel) = Hostel::find_by_id(&db_pool, booking.hostel_id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    policy::cancel_booking(&user, &booking, &hostel.hostel)?;

    if booking.status == BookingStatus::Cancelled {
        return Err(ApiError::Validation("Booking is already cancelled".into()));
    }

    let booking = Booking::set_status(&db_pool, id, BookingStatus::Cancelled).await?;

    Ok(Json(json!({
        "message": "Booking cancelled successfully",
        "booking": booking,
    })))
}
