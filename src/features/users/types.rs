//! Request and response types for the user-administration endpoints.

use crate::app_lib::AppError;
use crate::features::auth::types::AccessLevel;
use serde::{Deserialize, Serialize};

/// One row of the admin user table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRow {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub access_level: AccessLevel,
}

/// One page of the user list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UsersPage {
    pub users: Vec<UserRow>,
    pub page: u32,
    pub max_page: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub access_level: AccessLevel,
}

pub struct CreateUserForm<'a> {
    pub username: &'a str,
    pub name: &'a str,
    pub surname: &'a str,
    pub patronymic: &'a str,
    pub access_level: &'a str,
}

impl CreateUserRequest {
    /// Requires username, first name, last name, and a chosen access level.
    pub fn from_form(form: &CreateUserForm<'_>) -> Result<Self, AppError> {
        let username = form.username.trim();
        let name = form.name.trim();
        let surname = form.surname.trim();
        let access_level = AccessLevel::from_select(form.access_level);
        if username.is_empty() || name.is_empty() || surname.is_empty() || access_level.is_none() {
            return Err(AppError::Input(
                "Fill in all required fields: username, first name, last name, and access level."
                    .to_string(),
            ));
        }
        Ok(Self {
            username: username.to_string(),
            name: name.to_string(),
            surname: surname.to_string(),
            patronymic: form.patronymic.trim().to_string(),
            access_level: access_level.unwrap_or(AccessLevel::Guest),
        })
    }
}

/// Carries the one-time link the invited user needs to finish registration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetRightsRequest {
    pub username: String,
    pub new_access_level: AccessLevel,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub status_ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form<'a>() -> CreateUserForm<'a> {
        CreateUserForm {
            username: "sidorov",
            name: "Ivan",
            surname: "Sidorov",
            patronymic: "",
            access_level: "1",
        }
    }

    #[test]
    fn create_user_form_requires_the_mandatory_fields() {
        for missing in ["username", "name", "surname", "access_level"] {
            let mut form = form();
            match missing {
                "username" => form.username = " ",
                "name" => form.name = "",
                "surname" => form.surname = "",
                _ => form.access_level = "",
            }
            assert!(
                CreateUserRequest::from_form(&form).is_err(),
                "expected missing {missing} to fail"
            );
        }
    }

    #[test]
    fn create_user_form_trims_and_parses_the_level() {
        let request = CreateUserRequest::from_form(&form()).expect("valid form");
        assert_eq!(request.username, "sidorov");
        assert_eq!(request.access_level, AccessLevel::Reader);
        assert_eq!(request.patronymic, "");
    }

    #[test]
    fn set_rights_serializes_the_level_as_an_integer() {
        let request = SetRightsRequest {
            username: "sidorov".to_string(),
            new_access_level: AccessLevel::Admin,
        };
        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("\"new_access_level\":3"));
    }

    #[test]
    fn users_page_wire_shape_matches_the_backend() {
        let json = r#"{
            "users": [
                {"username": "sidorov", "name": "Ivan", "surname": "Sidorov",
                 "patronymic": "", "access_level": 2}
            ],
            "page": 1,
            "max_page": 4
        }"#;
        let page: UsersPage = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.users[0].access_level, AccessLevel::Editor);
        assert_eq!(page.max_page, 4);
    }
}
