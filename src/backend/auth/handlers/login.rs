/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/v1/sessions.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return user info and token
 *
 * Unknown email and wrong password both answer 422, each with its own
 * message; a token signing failure answers 400.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, UserPayload};
use crate::backend::error::{json_rejection_envelope, AccountError, ErrorEnvelope};
use crate::backend::server::state::AppState;
use crate::shared::Envelope;

const FAILED: &str = "Login failed";

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /api/v1/sessions HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Envelope<UserPayload>, ErrorEnvelope> {
    let Json(request) = payload.map_err(|rejection| json_rejection_envelope(FAILED, rejection))?;
    tracing::info!("Login request for: {}", request.email);

    let user = state
        .accounts
        .login(request)
        .await
        .map_err(|e| e.into_envelope(FAILED))?;

    let token = state
        .tokens
        .generate_token(user.id)
        .map_err(|e| AccountError::from(e).into_envelope(FAILED))?;

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(Envelope::success(
        "Successfully loggedin",
        UserPayload::new(&user, token),
    ))
}
