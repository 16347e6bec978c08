pub mod admin;
pub mod auth;
pub mod bookings;
pub mod db;
pub mod enquiries;
pub mod error;
pub mod hostels;
pub mod models;
pub mod policy;
pub mod reviews;
pub mod session;

use axum::{
    debug_handler,
    extract::FromRef,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

/// The full application: routes, session layer, CORS. Tests drive this router
/// directly; `main` serves it.
pub fn app(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(12)));

    Router::new()
        .route("/", get(index))
        .nest("/auth", auth::router())
        .nest("/hostels", hostels::router())
        .nest("/admin", admin::router())
        .nest("/reviews", reviews::router())
        .nest("/enquiries", enquiries::router())
        .nest("/bookings", bookings::router())
        .fallback(not_found)
        .with_state(state)
        .layer(session_layer)
        .layer(CorsLayer::permissive())
}

#[debug_handler]
async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "Hostel Finder Backend API",
        "status": "Running",
        "endpoints": {
            "auth": "/auth/signup, /auth/login, /auth/logout",
            "hostels": "/hostels, /hostels/search, /hostels/:id",
            "admin": "/admin/hostels, /admin/verify-hostel/:id, /admin/unverify-hostel/:id",
            "reviews": "/reviews, /reviews/hostel/:hostelId",
            "enquiries": "/enquiries, /enquiries/hostel/:id",
            "bookings": "/bookings, /bookings/student",
        },
    }))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Route not found" })))
}
