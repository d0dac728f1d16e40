use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::{AppError, FieldErrors};

/// Framework-default password policy.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const BLANK_MSG: &str = "This field may not be blank.";

/// Registration request body.
#[derive(Serialize, Deserialize)]
pub struct RUserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl RUserCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if self.username.trim().is_empty() {
            errors.push("username", BLANK_MSG);
        }
        if self.email.trim().is_empty() {
            errors.push("email", BLANK_MSG);
        } else if !self.email.contains('@') {
            errors.push("email", "Enter a valid email address.");
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            errors.push(
                "password",
                &format!(
                    "Ensure this field has at least {} characters.",
                    MIN_PASSWORD_LEN
                ),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Partial profile update; absent fields are left untouched.
#[derive(Serialize, Deserialize, Default)]
pub struct RUserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

impl RUserUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if matches!(&self.username, Some(u) if u.trim().is_empty()) {
            errors.push("username", BLANK_MSG);
        }
        match &self.email {
            Some(e) if e.trim().is_empty() => errors.push("email", BLANK_MSG),
            Some(e) if !e.contains('@') => errors.push("email", "Enter a valid email address."),
            _ => {}
        }
        if matches!(&self.password, Some(p) if p.len() < MIN_PASSWORD_LEN) {
            errors.push(
                "password",
                &format!(
                    "Ensure this field has at least {} characters.",
                    MIN_PASSWORD_LEN
                ),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Validated column changes, ready for the persistence layer.
#[derive(Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<String>,
}

/// Insert payload, password already hashed.
pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

/// Public user representation. The password hash never leaves the service.
#[derive(Serialize, Deserialize)]
pub struct UserRes {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<UserModel> for UserRes {
    fn from(user: UserModel) -> Self {
        UserRes {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct RChangePassword {
    pub old_password: String,
    pub new_password: String,
}

/// Success envelope returned from a password change.
#[derive(Serialize, Deserialize)]
pub struct ChangePasswordRes {
    pub status: String,
    pub code: u16,
    pub message: String,
    pub data: Vec<serde_json::Value>,
}

impl ChangePasswordRes {
    pub fn updated() -> Self {
        ChangePasswordRes {
            status: "success".to_string(),
            code: 200,
            message: "Password updated successfully".to_string(),
            data: vec![],
        }
    }
}
