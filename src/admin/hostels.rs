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
use crate::models::{Hostel, HostelFilter};
use crate::policy::{self, RejectAction};
use crate::AppState;

/// All hostels, verified or not, for the verification dashboard.
#[debug_handler(state = AppState)]
pub(crate) async fn list_hostels(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    policy::require_admin(&user)?;

    let hostels = Hostel::find_all(&db_pool, &HostelFilter::default()).await?;
    Ok(Json(hostels))
}

#[debug_handler(state = AppState)]
pub(crate) async fn verify_hostel(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    policy::require_admin(&user)?;

    let Some(existing) = Hostel::find_by_id(&db_pool, id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    if existing.hostel.verified() {
        return Err(ApiError::Validation("Hostel is already verified".into()));
    }

    Hostel::set_verification(&db_pool, id, true).await?;
    let hostel = Hostel::find_by_id(&db_pool, id).await?;

    Ok(Json(json!({
        "message": "Hostel verified successfully",
        "hostel": hostel,
    })))
}

/// Admin rejection. A pending hostel is deleted outright (cascading away its
/// reviews, bookings, and enquiries); a verified hostel is only flipped back
/// to unverified.
#[debug_handler(state = AppState)]
pub(crate) async fn unverify_hostel(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    policy::require_admin(&user)?;

    let Some(existing) = Hostel::find_by_id(&db_pool, id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    match policy::reject_action(existing.hostel.verified()) {
        RejectAction::Delete => {
            Hostel::delete(&db_pool, id).await?;
            log::info!("hostel {id} rejected and deleted");

            Ok(Json(json!({
                "message": "Hostel rejected and removed successfully",
                "deleted": true,
            })))
        }
        RejectAction::Unverify => {
            Hostel::set_verification(&db_pool, id, false).await?;
            let hostel = Hostel::find_by_id(&db_pool, id).await?;

            Ok(Json(json!({
                "message": "Hostel unverified successfully",
                "hostel": hostel,
                "deleted": false,
            })))
        }
    }
}
