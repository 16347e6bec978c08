use axum::{debug_handler, extract::State, response::IntoResponse, Json};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::models::{Booking, Role};
use crate::{policy, AppState};

#[derive(Debug, Serialize)]
pub(crate) struct UserCounts {
    total: i64,
    students: i64,
    owners: i64,
    admins: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct HostelCounts {
    total: i64,
    verified: i64,
    pending: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct Statistics {
    users: UserCounts,
    hostels: HostelCounts,
    reviews: i64,
    bookings: i64,
    enquiries: i64,
}

async fn count(pool: &SqlitePool, sql: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar(sql).fetch_one(pool).await
}

async fn count_role(pool: &SqlitePool, role: Role) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?")
        .bind(role)
        .fetch_one(pool)
        .await
}

#[debug_handler(state = AppState)]
pub(crate) async fn statistics(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    policy::require_admin(&user)?;

    let stats = Statistics {
        users: UserCounts {
            total: count(&db_pool, "SELECT COUNT(*) FROM users").await?,
            students: count_role(&db_pool, Role::Student).await?,
            owners: count_role(&db_pool, Role::Owner).await?,
            admins: count_role(&db_pool, Role::Admin).await?,
        },
        hostels: HostelCounts {
            total: count(&db_pool, "SELECT COUNT(*) FROM hostels").await?,
            verified: count(&db_pool, "SELECT COUNT(*) FROM hostels WHERE is_verified = 1").await?,
            pending: count(&db_pool, "SELECT COUNT(*) FROM hostels WHERE is_verified = 0").await?,
        },
        reviews: count(&db_pool, "SELECT COUNT(*) FROM reviews").await?,
        bookings: count(&db_pool, "SELECT COUNT(*) FROM bookings").await?,
        enquiries: count(&db_pool, "SELECT COUNT(*) FROM enquiries").await?,
    };

    Ok(Json(stats))
}

/// Every booking in the system with hostel and student names attached.
#[debug_handler(state = AppState)]
pub(crate) async fn bookings(
    State(db_pool): State<SqlitePool>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    policy::require_admin(&user)?;

    let bookings = Booking::find_all(&db_pool).await?;
    Ok(Json(bookings))
}
