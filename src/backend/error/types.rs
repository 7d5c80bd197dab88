/**
 * Backend Error Types
 *
 * `AccountError` is the single error type of the account flow. Handlers catch
 * it and turn it into an envelope; it never escapes a request.
 *
 * # Error Categories
 *
 * - Client errors: `Validation`, `DuplicateEmail`, `NotFound`,
 *   `InvalidCredentials`
 * - Server errors: `Storage`, `PasswordHash`, `Signing`
 *
 * Server errors are logged with full detail but shown to clients only as a
 * generic message.
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::shared::ValidationErrors;

/// Generic message shown to clients for server-side failures
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Account flow errors
#[derive(Debug, Error)]
pub enum AccountError {
    /// Malformed or missing request fields
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Another account already uses this email
    #[error("Email has already been registered")]
    DuplicateEmail,

    /// No user matches the lookup
    #[error("No user found with that email")]
    NotFound,

    /// The password does not match the stored hash
    #[error("Wrong password")]
    InvalidCredentials,

    /// The user store failed
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Password hashing or verification failed
    #[error("password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// The token could not be signed
    #[error("signing error: {0}")]
    Signing(#[from] TokenError),
}

impl AccountError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 422 Unprocessable Entity
    /// - `NotFound`, `InvalidCredentials` - 422 Unprocessable Entity
    /// - everything else - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::NotFound | Self::InvalidCredentials => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::DuplicateEmail | Self::Storage(_) | Self::PasswordHash(_) | Self::Signing(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Whether the failure is on the server side
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::PasswordHash(_) | Self::Signing(_)
        )
    }

    /// Message safe to show to clients
    pub fn public_message(&self) -> String {
        if self.is_server_error() {
            SERVER_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Startup failures of the server binary
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
