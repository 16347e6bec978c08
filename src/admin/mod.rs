use axum::{
    routing::{get, put},
    Router,
};

use crate::AppState;

mod hostels;
mod stats;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hostels", get(hostels::list_hostels))
        .route("/verify-hostel/{id}", put(hostels::verify_hostel))
        .route("/unverify-hostel/{id}", put(hostels::unverify_hostel))
        .route("/statistics", get(stats::statistics))
        .route("/bookings", get(stats::bookings))
}
