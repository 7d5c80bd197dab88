//! Authentication test helpers
//!
//! Provides utilities for registering test users through the API and
//! reading back their ids and tokens.

use serde_json::{json, Value};
use uuid::Uuid;

use super::server::TestApp;

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a user through `POST /api/v1/users`
pub async fn register_test_user(app: &TestApp, email: &str, password: &str) -> TestUser {
    let response = app
        .server
        .post("/api/v1/users")
        .json(&json!({
            "name": "Test User",
            "occupation": "Tester",
            "email": email,
            "password": password,
        }))
        .await;

    let body: Value = response.json();
    let data = &body["data"];
    TestUser {
        id: data["id"].as_str().expect("registered user has an id").to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token: data["token"].as_str().expect("registered user has a token").to_string(),
    }
}

/// Register a user with a unique email
pub async fn register_unique_test_user(app: &TestApp) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    register_test_user(app, &email, "test_password_123").await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
