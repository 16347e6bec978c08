use axum::{
    routing::{get, post, put},
    Router,
};

use crate::AppState;

mod create;
mod read;
mod status;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create::create_booking))
        .route("/student", get(read::bookings_by_student))
        .route("/{id}/confirm", put(status::confirm_booking))
        .route("/{id}/cancel", put(status::cancel_booking))
}
