use axum::{routing::get, Router};

use crate::AppState;

mod item;
mod list;
mod manage;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/public", get(list::public_hostels))
        .route("/search", get(list::search_hostels))
        .route("/", get(list::list_hostels).post(manage::create_hostel))
        .route(
            "/{id}",
            get(item::get_hostel)
                .put(manage::update_hostel)
                .delete(manage::delete_hostel),
        )
}
