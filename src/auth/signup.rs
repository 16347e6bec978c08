use axum::{debug_handler, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::error::{ApiError, ApiResult};
use crate::models::{Role, User};

#[derive(Debug, Deserialize)]
pub(crate) struct SignupBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: Option<String>,
    contact_number: Option<String>,
}

#[debug_handler]
pub(crate) async fn signup(
    State(db_pool): State<SqlitePool>,
    Json(body): Json<SignupBody>,
) -> ApiResult<impl IntoResponse> {
    let (Some(name), Some(email), Some(password), Some(role)) =
        (&body.name, &body.email, &body.password, &body.role)
    else {
        return Err(ApiError::Validation(
            "Name, email, password, and role are required".into(),
        ));
    };

    // Admin accounts are seeded, never self-registered.
    let role = match role.as_str() {
        "student" => Role::Student,
        "owner" => Role::Owner,
        _ => {
            return Err(ApiError::Validation(
                "Role must be 'student' or 'owner'".into(),
            ));
        }
    };

    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Name, email, password, and role are required".into(),
        ));
    }

    if User::find_by_email(&db_pool, email).await?.is_some() {
        return Err(ApiError::Validation("Email already registered".into()));
    }

    let user = User::create(
        &db_pool,
        name.trim(),
        email.trim(),
        password,
        role,
        body.contact_number.as_deref(),
    )
    .await?;

    log::info!("new {} account: {}", role.as_str(), user.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Account created successfully",
            "user": user,
        })),
    ))
}
