/**
 * Authentication Handler Types
 *
 * Request bodies, their validation rules and the payloads placed in the
 * `data` field of success envelopes.
 *
 * Request fields default to empty when absent, so a missing field is
 * reported by `validate` as a per-field error rather than as a JSON
 * parsing failure.
 */
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::shared::ValidationErrors;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Longest password bcrypt hashes in full; later bytes would be ignored
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Maximum length of profile fields
pub const MAX_PROFILE_FIELD_LEN: usize = 100;

/// Basic `local@domain` shape check
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn check_password_size(errors: &mut ValidationErrors, password: &str) {
    if password.len() > MAX_PASSWORD_BYTES {
        errors.push("password", format!("must be at most {} bytes", MAX_PASSWORD_BYTES));
    }
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        errors.push("email", "is required");
    } else if !is_valid_email(email) {
        errors.push("email", "must be a valid email address");
    }
}

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    /// Display name (optional)
    #[serde(default)]
    pub name: String,
    /// Occupation (optional)
    #[serde(default)]
    pub occupation: String,
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (will be hashed before storage)
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.chars().count() > MAX_PROFILE_FIELD_LEN {
            errors.push("name", format!("must be at most {} characters", MAX_PROFILE_FIELD_LEN));
        }
        if self.occupation.chars().count() > MAX_PROFILE_FIELD_LEN {
            errors.push(
                "occupation",
                format!("must be at most {} characters", MAX_PROFILE_FIELD_LEN),
            );
        }

        check_email(&mut errors, &self.email);

        if self.password.is_empty() {
            errors.push("password", "is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LEN),
            );
        } else {
            check_password_size(&mut errors, &self.password);
        }

        errors.into_result()
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (verified against the stored hash)
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.push("password", "is required");
        } else {
            check_password_size(&mut errors, &self.password);
        }
        errors.into_result()
    }
}

/// Email availability request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CheckEmailRequest {
    #[serde(default)]
    pub email: String,
}

impl CheckEmailRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, &self.email);
        errors.into_result()
    }
}

/// User payload returned by register, login and fetch
///
/// Never includes the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserPayload {
    /// User's unique ID (UUID)
    pub id: String,
    pub name: String,
    pub occupation: String,
    pub email: String,
    /// Session token; empty when the endpoint does not issue one
    pub token: String,
    /// Public path of the avatar, if any
    pub image_url: Option<String>,
}

impl UserPayload {
    pub fn new(user: &User, token: impl Into<String>) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            occupation: user.occupation.clone(),
            email: user.email.clone(),
            token: token.into(),
            image_url: user.avatar_path.clone(),
        }
    }
}

/// Payload of the email availability check
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailAvailability {
    pub is_available: bool,
}

/// Payload of the avatar upload, on success and on failure
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarUpload {
    pub is_uploaded: bool,
}
