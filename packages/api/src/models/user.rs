//! # Account models
//!
//! Shapes exchanged with the service's `/users` endpoints.
//!
//! - [`User`] is what `GET /users/me` returns for a valid token. The role flags
//!   arrive camel-cased (`isAdmin`, `isAthlete`) and are renamed on the Rust side.
//! - [`SigninResponse`] carries the bearer token issued by `POST /users/signin`.
//! - [`SignupRequest`] is the registration form body for `POST /users/signup`.
//! - [`MessageResponse`] is the generic `{"message": ...}` acknowledgement.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The signed-in account as reported by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    #[serde(rename = "isAthlete", default)]
    pub is_athlete: bool,
}

impl User {
    /// Name to greet the user with, never empty.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            "athlete"
        } else {
            name
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SigninResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone_number: String,
}

/// Longest password the service accepts (bcrypt input limit).
pub const MAX_PASSWORD_LEN: usize = 72;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignupError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at most {} characters", MAX_PASSWORD_LEN)]
    PasswordTooLong,
}

impl SignupRequest {
    /// Build a request from raw form input, trimming everything but the password.
    pub fn from_form(email: &str, password: &str, full_name: &str, phone_number: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
            full_name: full_name.trim().to_string(),
            phone_number: phone_number.trim().to_string(),
        }
    }

    /// Checks the service would otherwise reject with a less helpful message.
    pub fn validate(&self) -> Result<(), SignupError> {
        if self.email.is_empty()
            || self.password.is_empty()
            || self.full_name.is_empty()
            || self.phone_number.is_empty()
        {
            return Err(SignupError::MissingFields);
        }
        if !self.email.contains('@') {
            return Err(SignupError::InvalidEmail);
        }
        if self.password.chars().count() > MAX_PASSWORD_LEN {
            return Err(SignupError::PasswordTooLong);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
