use axum::{
    routing::{get, post, put},
    Router,
};

use crate::AppState;

mod create;
mod edit;
mod read;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create::create_review))
        .route("/hostel/{hostel_id}", get(read::reviews_by_hostel))
        .route("/student/{student_id}", get(read::reviews_by_student))
        .route(
            "/{id}",
            put(edit::update_review).delete(edit::delete_review),
        )
}
