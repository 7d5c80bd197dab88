/**
 * Email Availability Handler
 *
 * POST /api/v1/email_checkers tells a client whether an email can still be
 * used to register. An unknown email is the normal "available" answer, not
 * an error. Every failure, including storage errors, answers 422.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{CheckEmailRequest, EmailAvailability};
use crate::backend::error::{json_rejection_envelope, ErrorEnvelope};
use crate::backend::server::state::AppState;
use crate::shared::Envelope;

const FAILED: &str = "Email checking failed";

/// Email availability handler
pub async fn check_email(
    State(state): State<AppState>,
    payload: Result<Json<CheckEmailRequest>, JsonRejection>,
) -> Result<Envelope<EmailAvailability>, ErrorEnvelope> {
    let Json(request) = payload.map_err(|rejection| json_rejection_envelope(FAILED, rejection))?;

    let is_available = state
        .accounts
        .is_email_available(request)
        .await
        .map_err(|e| e.into_envelope_with_status(FAILED, StatusCode::UNPROCESSABLE_ENTITY))?;

    let message = if is_available {
        "Email is available"
    } else {
        "Email has been registered"
    };

    Ok(Envelope::success(message, EmailAvailability { is_available }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::types::RegisterRequest;
    use crate::backend::server::state::test_support::memory_state;
    use std::path::Path;

    fn request(email: &str) -> Result<Json<CheckEmailRequest>, JsonRejection> {
        Ok(Json(CheckEmailRequest {
            email: email.to_string(),
        }))
    }

    #[tokio::test]
    async fn test_available_then_registered() {
        let state = memory_state(Path::new("public")).await;

        let envelope = check_email(State(state.clone()), request("a@x.com")).await.unwrap();
        assert_eq!(envelope.meta.message, "Email is available");
        assert_eq!(envelope.data, Some(EmailAvailability { is_available: true }));

        state
            .accounts
            .register_user(RegisterRequest {
                email: "a@x.com".to_string(),
                password: "secret1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let envelope = check_email(State(state), request("a@x.com")).await.unwrap();
        assert_eq!(envelope.meta.message, "Email has been registered");
        assert_eq!(envelope.data, Some(EmailAvailability { is_available: false }));
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let state = memory_state(Path::new("public")).await;

        let envelope = check_email(State(state), request("nope")).await.unwrap_err();
        assert_eq!(envelope.meta.code, 422);
        assert_eq!(envelope.meta.message, FAILED);
    }
}
