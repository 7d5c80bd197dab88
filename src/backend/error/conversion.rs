/**
 * Error Conversion
 *
 * Turns envelopes into HTTP responses and account errors into error
 * envelopes. The HTTP status of a response is always `meta.code`, so the two
 * can never disagree.
 *
 * # Error Payloads
 *
 * Validation failures list every bad field:
 *
 * ```json
 * { "errors": ["email: is required", "password: is required"] }
 * ```
 *
 * Any other failure carries one shallow message:
 *
 * ```json
 * { "errors": "Email has already been registered" }
 * ```
 */
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::backend::error::types::AccountError;
use crate::shared::Envelope;

/// `data` of an error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    /// One entry per invalid field
    Fields { errors: Vec<String> },
    /// Single generic message
    Message { errors: String },
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            errors: message.into(),
        }
    }
}

impl From<&AccountError> for ErrorBody {
    fn from(error: &AccountError) -> Self {
        match error {
            AccountError::Validation(errors) => Self::Fields {
                errors: errors.messages(),
            },
            other => Self::message(other.public_message()),
        }
    }
}

/// Envelope returned by handlers on failure
pub type ErrorEnvelope = Envelope<ErrorBody>;

impl AccountError {
    /// Render this error as an envelope titled `message`
    ///
    /// Server-side failures are logged here with full detail; the envelope
    /// only carries the public message.
    pub fn into_envelope(self, message: &str) -> ErrorEnvelope {
        let status = self.status_code();
        self.into_envelope_with_status(message, status)
    }

    /// Same as `into_envelope` with an endpoint-specific status code
    pub fn into_envelope_with_status(self, message: &str, status: StatusCode) -> ErrorEnvelope {
        if self.is_server_error() {
            tracing::error!("{}: {}", message, self);
        } else {
            tracing::warn!("{}: {}", message, self);
        }
        Envelope::error(message, status.as_u16(), Some(ErrorBody::from(&self)))
    }
}

/// 422 envelope for a body that could not be parsed as the expected JSON
pub fn json_rejection_envelope(message: &str, rejection: JsonRejection) -> ErrorEnvelope {
    tracing::warn!("{}: {}", message, rejection.body_text());
    Envelope::error(
        message,
        StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
        Some(ErrorBody::Fields {
            errors: vec![rejection.body_text()],
        }),
    )
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    /// Serialize the envelope as JSON with `meta.code` as the status
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.meta.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{Status, ValidationErrors};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "is required");
        errors.push("password", "is required");

        let envelope = AccountError::Validation(errors).into_envelope("Register account failed");
        assert_eq!(envelope.meta.code, 422);
        assert_eq!(envelope.meta.status, Status::Error);
        assert_eq!(
            envelope.data,
            Some(ErrorBody::Fields {
                errors: vec!["email: is required".to_string(), "password: is required".to_string()],
            })
        );
    }

    #[test]
    fn test_storage_error_is_generic() {
        let envelope =
            AccountError::Storage(sqlx::Error::PoolTimedOut).into_envelope("Register account failed");

        assert_eq!(envelope.meta.code, 400);
        assert_eq!(envelope.data, Some(ErrorBody::message("Server error")));
    }

    #[test]
    fn test_status_override() {
        let envelope = AccountError::Storage(sqlx::Error::PoolTimedOut)
            .into_envelope_with_status("Email checking failed", StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(envelope.meta.code, 422);
        assert_eq!(envelope.data, Some(ErrorBody::message("Server error")));
    }

    #[test]
    fn test_error_body_wire_format() {
        let body = serde_json::to_value(ErrorBody::message("Wrong password")).unwrap();
        assert_eq!(body, serde_json::json!({ "errors": "Wrong password" }));

        let decoded: ErrorBody =
            serde_json::from_value(serde_json::json!({ "errors": ["email: is required"] })).unwrap();
        assert!(matches!(decoded, ErrorBody::Fields { .. }));
    }

    #[test]
    fn test_response_status_follows_meta_code() {
        let envelope: Envelope<ErrorBody> = Envelope::error("Unauthorized", 401, None);
        let response = envelope.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let envelope = Envelope::success("ok", ErrorBody::message("none"));
        assert_eq!(envelope.into_response().status(), StatusCode::OK);
    }
}
