/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (`/api/v1/...`)
 * 2. Static avatar files (`/images`)
 * 3. Fallback handler (404 envelope)
 */
use axum::{http::StatusCode, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::shared::Envelope;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (account service, tokens, avatar storage)
/// * `config` - Server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    let router = configure_api_routes(Router::new(), config);

    // Uploaded avatars live under <public_dir>/images/avatar
    let router = router.nest_service("/images", ServeDir::new(config.public_dir.join("images")));

    let router = router.fallback(not_found);

    router.layer(TraceLayer::new_for_http()).with_state(app_state)
}

async fn not_found() -> Envelope<()> {
    Envelope::error("Not found", StatusCode::NOT_FOUND.as_u16(), None)
}
