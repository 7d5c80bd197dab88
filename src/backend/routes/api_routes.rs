/**
 * API Route Handlers
 *
 * This module defines the versioned account endpoints.
 *
 * # Routes
 *
 * ## Accounts
 * - `POST /api/v1/users` - User registration
 * - `POST /api/v1/sessions` - User login
 * - `POST /api/v1/email_checkers` - Email availability
 *
 * ## Authenticated
 * - `POST /api/v1/avatars` - Avatar upload
 * - `GET /api/v1/users/fetch` - Get current user info
 */
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{check_email, fetch_user, login, register_user, upload_avatar};
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `config` - Server configuration (avatar body limit)
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// `/api/v1/avatars` and `/api/v1/users/fetch` require a JWT token in the
/// `Authorization` header, checked by the `CurrentUser` extractor. The other
/// routes are public.
pub fn configure_api_routes(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    router
        .route("/api/v1/users", post(register_user))
        .route("/api/v1/users/fetch", get(fetch_user))
        .route("/api/v1/sessions", post(login))
        .route("/api/v1/email_checkers", post(check_email))
        .route(
            "/api/v1/avatars",
            post(upload_avatar).layer(DefaultBodyLimit::max(config.max_avatar_bytes)),
        )
}
