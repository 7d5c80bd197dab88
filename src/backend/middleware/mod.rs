//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - `CurrentUser` extractor for routes that require a token

pub mod auth;

pub use auth::{bearer_token, CurrentUser};
