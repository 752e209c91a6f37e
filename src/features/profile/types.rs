//! Request types for profile self-service.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

/// Success payload for profile operations that answer with a message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiMessage {
    pub detail: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersonalDataRequest {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
}

impl PersonalDataRequest {
    pub fn from_form(
        username: &str,
        name: &str,
        surname: &str,
        patronymic: &str,
    ) -> Result<Self, AppError> {
        let username = username.trim();
        let name = name.trim();
        let surname = surname.trim();
        if username.is_empty() || name.is_empty() || surname.is_empty() {
            return Err(AppError::Input(
                "Username, first name, and last name are required.".to_string(),
            ));
        }
        Ok(Self {
            username: username.to_string(),
            name: name.to_string(),
            surname: surname.to_string(),
            patronymic: patronymic.trim().to_string(),
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub password: String,
    pub new_password: String,
    pub repeated_password: String,
}

impl ChangePasswordRequest {
    pub fn from_form(
        password: &str,
        new_password: &str,
        repeated_password: &str,
    ) -> Result<Self, AppError> {
        let password = password.trim();
        let new_password = new_password.trim();
        let repeated_password = repeated_password.trim();
        if password.is_empty() || new_password.is_empty() || repeated_password.is_empty() {
            return Err(AppError::Input(
                "Enter the current password and the new password twice.".to_string(),
            ));
        }
        if new_password != repeated_password {
            return Err(AppError::Input("New passwords do not match.".to_string()));
        }
        Ok(Self {
            password: password.to_string(),
            new_password: new_password.to_string(),
            repeated_password: repeated_password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_data_requires_username_name_and_surname() {
        assert!(PersonalDataRequest::from_form("", "Anna", "Ivanova", "").is_err());
        assert!(PersonalDataRequest::from_form("ivanova", "", "Ivanova", "").is_err());
        assert!(PersonalDataRequest::from_form("ivanova", "Anna", " ", "").is_err());
        let request =
            PersonalDataRequest::from_form(" ivanova ", "Anna", "Ivanova", "").expect("valid");
        assert_eq!(request.username, "ivanova");
        assert_eq!(request.patronymic, "");
    }

    #[test]
    fn change_password_requires_matching_new_passwords() {
        assert!(ChangePasswordRequest::from_form("", "new", "new").is_err());
        assert!(ChangePasswordRequest::from_form("old", "new1", "new2").is_err());
        let request = ChangePasswordRequest::from_form("old", "new", "new").expect("valid");
        assert_eq!(request.password, "old");
        assert_eq!(request.new_password, "new");
    }
}
