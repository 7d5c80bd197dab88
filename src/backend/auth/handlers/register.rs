/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/v1/users.
 *
 * # Registration Process
 *
 * 1. Parse the JSON body
 * 2. Validate, check email uniqueness, hash and store (account service)
 * 3. Generate JWT token
 * 4. Return user info and token
 *
 * # Responses
 *
 * - `200` - account created, `data` is the user payload with a token
 * - `422` - unparseable body or invalid fields, `data.errors` lists them
 * - `400` - email taken or a server-side failure, `data.errors` is a message
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, UserPayload};
use crate::backend::error::{json_rejection_envelope, AccountError, ErrorEnvelope};
use crate::backend::server::state::AppState;
use crate::shared::Envelope;

const FAILED: &str = "Register account failed";

/// Register handler
///
/// # Example Request
///
/// ```http
/// POST /api/v1/users HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada",
///   "occupation": "Engineer",
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "meta": { "message": "Account has been registered", "code": 200, "status": "success" },
///   "data": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "name": "Ada",
///     "occupation": "Engineer",
///     "email": "user@example.com",
///     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///     "image_url": null
///   }
/// }
/// ```
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Envelope<UserPayload>, ErrorEnvelope> {
    let Json(request) = payload.map_err(|rejection| json_rejection_envelope(FAILED, rejection))?;
    tracing::info!("Register request for email: {}", request.email);

    let user = state
        .accounts
        .register_user(request)
        .await
        .map_err(|e| e.into_envelope(FAILED))?;

    let token = state
        .tokens
        .generate_token(user.id)
        .map_err(|e| AccountError::from(e).into_envelope(FAILED))?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok(Envelope::success(
        "Account has been registered",
        UserPayload::new(&user, token),
    ))
}
