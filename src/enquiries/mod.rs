use axum::{
    routing::{get, post, put},
    Router,
};

use crate::AppState;

mod create;
mod read;
mod reply;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create::create_enquiry))
        .route("/owner", get(read::enquiries_by_owner))
        .route("/student", get(read::enquiries_by_student))
        .route("/hostel/{hostel_id}", get(read::enquiries_by_hostel))
        .route("/{id}/reply", put(reply::reply_to_enquiry))
}
