//! Session keys shared between the auth handlers and the `AuthUser` extractor.

pub const USER_ID: &str = "user_id";
