use axum::{
    debug_handler,
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::models::{Hostel, HostelFilter, Role};
use crate::{policy, AppState};

/// Verified hostels for the landing page. No authentication required.
#[debug_handler]
pub(crate) async fn public_hostels(
    State(db_pool): State<SqlitePool>,
) -> ApiResult<impl IntoResponse> {
    let filter = HostelFilter {
        verified_only: true,
        ..Default::default()
    };
    let hostels = Hostel::find_all(&db_pool, &filter).await?;
    Ok(Json(hostels))
}

/// Role-scoped listing: students get verified hostels with owner contact
/// details, owners get their own rows, admins get everything.
#[debug_handler(state = AppState)]
pub(crate) async fn list_hostels(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
) -> ApiResult<Response> {
    if user.role == Role::Student {
        let hostels = Hostel::list_verified_with_owner(&db_pool).await?;
        return Ok(Json(hostels).into_response());
    }

    let hostels = Hostel::find_all(&db_pool, &policy::scope_filter(&user)).await?;
    Ok(Json(hostels).into_response())
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    city: Option<String>,
    #[serde(rename = "maxRent")]
    max_rent: Option<i64>,
    facility: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn search_hostels(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
    Query(SearchQuery { city, max_rent, facility }): Query<SearchQuery>,
) -> ApiResult<impl IntoResponse> {
    let mut filter = policy::scope_filter(&user);
    filter.city = city;
    filter.max_rent = max_rent;
    filter.facility = facility;

    let hostels = Hostel::find_all(&db_pool, &filter).await?;
    Ok(Json(hostels))
}
