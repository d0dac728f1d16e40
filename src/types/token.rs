use serde::{Deserialize, Serialize};

use crate::types::error::{AppError, FieldErrors};
use crate::types::user::BLANK_MSG;

/// Login request body.
#[derive(Serialize, Deserialize)]
pub struct RObtainToken {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl RObtainToken {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if self.username.trim().is_empty() {
            errors.push("username", BLANK_MSG);
        }
        if self.password.is_empty() {
            errors.push("password", BLANK_MSG);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct TokenRes {
    pub token: String,
}
