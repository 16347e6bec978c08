use axum::{extract::FromRequestParts, http::request::Parts, routing::post, Router};
use tower_sessions::Session;

use crate::error::ApiError;
use crate::models::{Role, User};
use crate::session::USER_ID;
use crate::AppState;

mod login;
mod logout;
mod signup;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup::signup))
        .route("/login", post(login::login))
        .route("/logout", post(logout::logout))
}

/// The requester, resolved from the session cookie to a fresh `users` row on
/// every request. Extracting this is what "authenticated" means for a route.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthenticated)?;

        let Some(user_id) = session.get::<i64>(USER_ID).await? else {
            return Err(ApiError::Unauthenticated);
        };

        // A session pointing at a deleted account counts as no session at all.
        let Some(user) = User::find_by_id(&state.db_pool, user_id).await? else {
            return Err(ApiError::Unauthenticated);
        };

        Ok(AuthUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        })
    }
}
