use axum::{
    debug_handler,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::models::hostel::HostelUpdate;
use crate::models::{Hostel, Role};
use crate::{policy, AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct CreateHostelBody {
    name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    rent: Option<i64>,
    facilities: Option<String>,
    contact_number: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn create_hostel(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Json(body): Json<CreateHostelBody>,
) -> ApiResult<impl IntoResponse> {
    policy::require_role(&user, Role::Owner, "create hostels")?;

    let (Some(name), Some(address), Some(city), Some(rent)) =
        (&body.name, &body.address, &body.city, body.rent)
    else {
        return Err(ApiError::Validation(
            "Name, address, city, and rent are required".into(),
        ));
    };

    if rent <= 0 {
        return Err(ApiError::Validation("Rent must be a positive number".into()));
    }

    let hostel = Hostel::create(
        &db_pool,
        name,
        address,
        city,
        rent,
        body.facilities.as_deref().unwrap_or(""),
        user.id,
        body.contact_number.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Hostel created successfully (pending verification)",
            "hostel": hostel,
        })),
    ))
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateHostelBody {
    name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    rent: Option<i64>,
    facilities: Option<String>,
    contact_number: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn update_hostel(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(body): Json<UpdateHostelBody>,
) -> ApiResult<impl IntoResponse> {
    let Some(existing) = Hostel::find_by_id(&db_pool, id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    policy::modify_hostel(&user, &existing.hostel, "update")?;

    if let Some(rent) = body.rent {
        if rent <= 0 {
            return Err(ApiError::Validation("Rent must be a positive number".into()));
        }
    }

    let changes = HostelUpdate {
        name: body.name,
        address: body.address,
        city: body.city,
        rent: body.rent,
        facilities: body.facilities,
        contact_number: body.contact_number,
    };

    if changes.is_empty() {
        return Err(ApiError::Validation("No fields to update".into()));
    }

    Hostel::update(&db_pool, id, &changes).await?;

    Ok(Json(json!({ "message": "Hostel updated successfully" })))
}

#[debug_handler(state = AppState)]
pub(crate) async fn delete_hostel(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let Some(existing) = Hostel::find_by_id(&db_pool, id).await? else {
        return Err(ApiError::NotFound("Hostel"));
    };

    policy::modify_hostel(&user, &existing.hostel, "delete")?;

    Hostel::delete(&db_pool, id).await?;

    Ok(Json(json!({ "message": "Hostel deleted successfully" })))
}
