/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`:
 *
 * 1. Connect to the database and run migrations
 * 2. Create the account service, token issuer and avatar storage
 * 3. Create and configure the router
 *
 * Unlike optional integrations, the database is required: startup fails if
 * it cannot be reached or migrated.
 */
use std::sync::Arc;

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::backend::auth::avatars::AvatarStorage;
use crate::backend::auth::service::AccountService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::SqlxUserRepository;
use crate::backend::error::ServerError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Connect to the database and run migrations
pub async fn load_database(database_url: &str) -> Result<SqlitePool, ServerError> {
    tracing::info!("Connecting to database...");
    let pool = SqlitePoolOptions::new().connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Assemble the application state around an existing pool
pub fn build_state(config: &ServerConfig, pool: SqlitePool) -> AppState {
    let repository = SqlxUserRepository::new(pool);
    let accounts = AccountService::new(Arc::new(repository), config.bcrypt_cost);
    let tokens = TokenIssuer::new(config.jwt_secret.clone(), config.token_ttl_hours);
    let avatars = AvatarStorage::new(config.public_dir.clone());

    AppState::new(accounts, tokens, avatars)
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, ServerError> {
    tracing::info!("Initializing account server");

    let pool = load_database(&config.database_url).await?;
    tokio::fs::create_dir_all(&config.public_dir).await?;

    let app_state = build_state(config, pool);
    let app = create_router(app_state, config);

    tracing::info!("Router configured");
    Ok(app)
}
