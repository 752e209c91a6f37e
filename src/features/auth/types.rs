//! Session snapshot and auth request types. Payloads carry credentials, so
//! they must never be logged.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access levels as stored by the backend, integer-encoded on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AccessLevel {
    Guest,
    Reader,
    Editor,
    Admin,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 4] = [
        AccessLevel::Guest,
        AccessLevel::Reader,
        AccessLevel::Editor,
        AccessLevel::Admin,
    ];

    pub fn as_i32(self) -> i32 {
        match self {
            AccessLevel::Guest => 0,
            AccessLevel::Reader => 1,
            AccessLevel::Editor => 2,
            AccessLevel::Admin => 3,
        }
    }

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(AccessLevel::Guest),
            1 => Some(AccessLevel::Reader),
            2 => Some(AccessLevel::Editor),
            3 => Some(AccessLevel::Admin),
            _ => None,
        }
    }

    /// Parses a `<select>` value; empty means nothing chosen.
    pub fn from_select(value: &str) -> Option<Self> {
        value
            .trim()
            .parse::<i32>()
            .ok()
            .and_then(Self::from_i32)
    }

    pub fn name(self) -> &'static str {
        match self {
            AccessLevel::Guest => "guest",
            AccessLevel::Reader => "reader",
            AccessLevel::Editor => "editor",
            AccessLevel::Admin => "admin",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl From<AccessLevel> for i32 {
    fn from(level: AccessLevel) -> Self {
        level.as_i32()
    }
}

impl TryFrom<i32> for AccessLevel {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        AccessLevel::from_i32(value).ok_or_else(|| format!("unknown access level: {value}"))
    }
}

/// Session snapshot injected by the server at page load. Contains no secrets.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub access_level: AccessLevel,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.access_level >= AccessLevel::Admin
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Trims the form fields and rejects empty credentials before any
    /// request is built.
    pub fn from_form(username: &str, password: &str) -> Result<Self, AppError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::Input(
                "Enter your username and password.".to_string(),
            ));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub new_password: String,
    pub repeated_password: String,
}

pub struct RegisterForm<'a> {
    pub username: &'a str,
    pub name: &'a str,
    pub surname: &'a str,
    pub patronymic: &'a str,
    pub new_password: &'a str,
    pub repeated_password: &'a str,
}

impl RegisterRequest {
    /// Requires a username and password; the rest is passed through trimmed.
    pub fn from_form(form: &RegisterForm<'_>) -> Result<Self, AppError> {
        let username = form.username.trim();
        let new_password = form.new_password.trim();
        if username.is_empty() || new_password.is_empty() {
            return Err(AppError::Input(
                "Enter a username and password.".to_string(),
            ));
        }
        Ok(Self {
            username: username.to_string(),
            name: form.name.trim().to_string(),
            surname: form.surname.trim().to_string(),
            patronymic: form.patronymic.trim().to_string(),
            new_password: new_password.to_string(),
            repeated_password: form.repeated_password.trim().to_string(),
        })
    }
}

/// Body for `POST /users/finish-reg`; the link carries `user_id` and `token`
/// as query parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetPasswordRequest {
    pub new_password: String,
    pub repeated_password: String,
}

impl SetPasswordRequest {
    pub fn from_form(new_password: &str, repeated_password: &str) -> Result<Self, AppError> {
        let new_password = new_password.trim();
        let repeated_password = repeated_password.trim();
        if new_password.is_empty() || repeated_password.is_empty() {
            return Err(AppError::Input("Enter the password twice.".to_string()));
        }
        if new_password != repeated_password {
            return Err(AppError::Input("Passwords do not match.".to_string()));
        }
        Ok(Self {
            new_password: new_password.to_string(),
            repeated_password: repeated_password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_levels_round_trip_through_wire_encoding() {
        for level in AccessLevel::ALL {
            let json = serde_json::to_string(&level).expect("Failed to serialize");
            assert_eq!(json, level.as_i32().to_string());
            let parsed: AccessLevel = serde_json::from_str(&json).expect("Failed to deserialize");
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn unknown_access_levels_are_rejected() {
        assert!(serde_json::from_str::<AccessLevel>("7").is_err());
        assert!(serde_json::from_str::<AccessLevel>("-1").is_err());
        assert_eq!(AccessLevel::from_select(""), None);
        assert_eq!(AccessLevel::from_select("abc"), None);
        assert_eq!(AccessLevel::from_select("2"), Some(AccessLevel::Editor));
    }

    #[test]
    fn only_admins_pass_the_admin_check() {
        let mut profile = UserProfile {
            username: "petrov".to_string(),
            name: "Petr".to_string(),
            surname: "Petrov".to_string(),
            patronymic: String::new(),
            access_level: AccessLevel::Editor,
        };
        assert!(!profile.is_admin());
        profile.access_level = AccessLevel::Admin;
        assert!(profile.is_admin());
    }

    #[test]
    fn login_form_rejects_empty_fields_before_any_request() {
        assert!(LoginRequest::from_form("", "secret").is_err());
        assert!(LoginRequest::from_form("petrov", "   ").is_err());
        let request = LoginRequest::from_form(" petrov ", " secret ").expect("valid form");
        assert_eq!(request.username, "petrov");
        assert_eq!(request.password, "secret");
    }

    #[test]
    fn register_form_requires_username_and_password() {
        let form = RegisterForm {
            username: "",
            name: "Petr",
            surname: "Petrov",
            patronymic: "",
            new_password: "secret123",
            repeated_password: "secret123",
        };
        assert!(RegisterRequest::from_form(&form).is_err());

        let form = RegisterForm {
            username: "petrov",
            ..form
        };
        let request = RegisterRequest::from_form(&form).expect("valid form");
        assert_eq!(request.username, "petrov");
        assert_eq!(request.new_password, "secret123");
    }

    #[test]
    fn set_password_form_requires_matching_passwords() {
        assert!(SetPasswordRequest::from_form("", "").is_err());
        assert!(SetPasswordRequest::from_form("secret123", "secret124").is_err());
        let request = SetPasswordRequest::from_form("secret123", "secret123").expect("valid form");
        assert_eq!(request.new_password, "secret123");
    }

    #[test]
    fn profile_wire_shape_matches_the_backend() {
        let json = r#"{
            "username": "ivanova",
            "name": "Anna",
            "surname": "Ivanova",
            "patronymic": "",
            "access_level": 3
        }"#;
        let profile: UserProfile = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(profile.username, "ivanova");
        assert_eq!(profile.access_level, AccessLevel::Admin);
    }
}
