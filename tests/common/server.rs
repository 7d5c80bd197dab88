//! Test server fixture
//!
//! Builds the real application through `create_app` against a SQLite file
//! and a public directory inside a temporary directory, so every test gets
//! its own database and avatar folder.

use std::path::PathBuf;

use account_service::backend::server::{config::ServerConfig, init::create_app};
use axum_test::TestServer;
use tempfile::TempDir;

/// Signing key used by the test server
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test application fixture
///
/// Keeps the temporary directory alive for as long as the server runs.
pub struct TestApp {
    pub server: TestServer,
    pub config: ServerConfig,
    dir: TempDir,
}

impl TestApp {
    /// Create a new app with a signing key configured
    pub async fn new() -> Self {
        Self::with_secret(Some(TEST_JWT_SECRET)).await
    }

    /// Create a new app, optionally without a signing key
    pub async fn with_secret(secret: Option<&str>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let mut builder = ServerConfig::builder()
            .database_url(database_url)
            .bcrypt_cost(4)
            .token_ttl_hours(1)
            .public_dir(dir.path().join("public"))
            .max_avatar_bytes(64 * 1024);
        if let Some(secret) = secret {
            builder = builder.jwt_secret(secret);
        }
        let config = builder.build().expect("Failed to build test config");

        let app = create_app(&config).await.expect("Failed to create app");
        let server = TestServer::new(app).expect("Failed to start test server");

        Self { server, config, dir }
    }

    /// Public directory the server writes avatars into
    pub fn public_dir(&self) -> PathBuf {
        self.config.public_dir.clone()
    }
}
