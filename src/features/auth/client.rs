//! Client wrappers for session endpoints. These helpers centralize endpoint
//! paths and session-aware requests; credentials must never be logged.

use crate::{
    app_lib::{AppError, post_empty_with_credentials, post_json_empty_with_credentials},
    features::auth::types::{LoginRequest, RegisterRequest, SetPasswordRequest},
};

/// Logs in with username and password; the server sets the session cookie.
pub async fn login(request: &LoginRequest) -> Result<(), AppError> {
    post_json_empty_with_credentials("/login", request).await
}

/// Registers a new account; the server authorizes it immediately.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    post_json_empty_with_credentials("/register", request).await
}

/// Ends the current session.
pub async fn logout() -> Result<(), AppError> {
    post_empty_with_credentials("/logout").await
}

/// Completes an invited user's registration by setting the first password.
/// `user_id` and `token` come from the one-time link.
pub async fn finish_registration(
    user_id: &str,
    token: &str,
    request: &SetPasswordRequest,
) -> Result<(), AppError> {
    let path = crate::app_lib::query::param_url(
        "/users/finish-reg",
        &[("user_id", Some(user_id)), ("token", Some(token))],
    );
    post_json_empty_with_credentials(&path, request).await
}
