//! Client helpers for the signed-in user's own account.

use crate::{
    app_lib::{
        AppError, delete_empty_with_credentials, post_empty_with_credentials,
        post_json_with_credentials,
    },
    features::profile::types::{ApiMessage, ChangePasswordRequest, PersonalDataRequest},
};

/// Updates the user's personal data and returns the confirmation message.
pub async fn change_personal_data(request: &PersonalDataRequest) -> Result<ApiMessage, AppError> {
    post_json_with_credentials("/change_personal_data", request).await
}

/// Changes the password; the backend ends every other session.
pub async fn change_password(request: &ChangePasswordRequest) -> Result<ApiMessage, AppError> {
    post_json_with_credentials("/change_password", request).await
}

/// Ends all sessions except the current one.
pub async fn logout_all() -> Result<(), AppError> {
    post_empty_with_credentials("/logout/all").await
}

/// Deletes the user's own account.
pub async fn delete_account() -> Result<(), AppError> {
    delete_empty_with_credentials("/delete-user").await
}
