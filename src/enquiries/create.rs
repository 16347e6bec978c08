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
use crate::models::{Enquiry, EnquiryKind, Hostel, Role};
use crate::{policy, AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct CreateEnquiryBody {
    hostel_id: Option<i64>,
    #[serde(rename = "type")]
    kind: Option<String>,
    message: Option<String>,
    scheduled_date: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn create_enquiry(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Json(body): Json<CreateEnquiryBody>,
) -> ApiResult<impl IntoResponse> {
    policy::require_role(&user, Role::Student, "create enquiries")?;

    let (Some(hostel_id), Some(kind)) = (body.hostel_id, &body.kind) else {
        return Err(ApiError::Validation("hostel_id and type are required".into()));
    };

    let kind = match kind.as_str() {
        "enquiry" => EnquiryKind::Enquiry,
        "schedule_visit" => EnquiryKind::ScheduleVisit,
        _ => {
            return Err(ApiError::Validation(
                "Type must be 'enquiry' or 'schedule_visit'".into(),
            ));
        }
    };

    if kind == EnquiryKind::ScheduleVisit && body.scheduled_date.is_none() {
        return Err(ApiError::Validation(
            "scheduled_date is required for schedule_visit".into(),
        ));
    }

    let Some(hostel) = Hostel::find_by_id(&db_pool, hostel_id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    policy::require_verified(&hostel.hostel, "enquire about")?;

    let enquiry = Enquiry::create(
        &db_pool,
        hostel_id,
        user.id,
        kind,
        body.message.as_deref(),
        body.scheduled_date.as_deref(),
    )
    .await?;

    let message = match kind {
        EnquiryKind::ScheduleVisit => "Visit scheduled successfully",
        EnquiryKind::Enquiry => "Enquiry sent successfully",
    };

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": message,
            "enquiry": enquiry,
        })),
    ))
}
