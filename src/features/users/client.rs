//! Client helpers for the admin endpoints. Endpoint paths stay centralized
//! here; the backend enforces the actual authorization.

use crate::{
    app_lib::{
        AppError, delete_json_with_credentials, get_json_with_credentials,
        post_json_empty_with_credentials, post_json_with_credentials, query::param_url,
    },
    features::users::types::{
        CreateUserRequest, CreateUserResponse, DeleteUserResponse, SetRightsRequest, UsersPage,
    },
};

/// Fetches one page of the user list.
pub async fn list_users(page: Option<u32>, page_size: Option<u32>) -> Result<UsersPage, AppError> {
    let page = page.map(|value| value.to_string());
    let page_size = page_size.map(|value| value.to_string());
    let path = param_url(
        "/users/list",
        &[
            ("page", page.as_deref()),
            ("page_size", page_size.as_deref()),
        ],
    );
    get_json_with_credentials(&path).await
}

/// Creates a user on behalf of an administrator and returns the one-time
/// registration link.
pub async fn create_user(request: &CreateUserRequest) -> Result<CreateUserResponse, AppError> {
    post_json_with_credentials("/users/create", request).await
}

/// Deletes a user by username.
pub async fn delete_user(username: &str) -> Result<DeleteUserResponse, AppError> {
    delete_json_with_credentials(&format!("/users/delete/{username}")).await
}

/// Assigns a new access level to a user.
pub async fn set_rights(request: &SetRightsRequest) -> Result<(), AppError> {
    post_json_empty_with_credentials("/set_rights", request).await
}

/// Href for a user-list page, skipping defaulted parameters.
pub fn users_page_href(page: Option<u32>, page_size: Option<u32>) -> String {
    let page = page.map(|value| value.to_string());
    let page_size = page_size.map(|value| value.to_string());
    param_url(
        "/users",
        &[
            ("page", page.as_deref()),
            ("page_size", page_size.as_deref()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::users_page_href;

    #[test]
    fn users_page_href_skips_absent_parameters() {
        assert_eq!(users_page_href(None, None), "/users");
        assert_eq!(users_page_href(Some(3), None), "/users?page=3");
        assert_eq!(
            users_page_href(Some(2), Some(50)),
            "/users?page=2&page_size=50"
        );
    }
}
