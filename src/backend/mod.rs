//! Backend Module
//!
//! This module contains all server-side code of the account service: an
//! Axum HTTP server in front of a SQLite user store.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, JWT tokens, avatars and their handlers
//! - **`middleware`** - The `CurrentUser` extractor
//! - **`error`** - Backend error types and their envelopes
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts and authentication
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the account service, the token issuer and the avatar
//! storage. All three are cheap to clone and immutable after startup, so
//! handlers share them without locks.
//!
//! # Error Handling
//!
//! - `AccountError` for everything the account flow can fail with
//! - `ServerError` for startup failures (database, migrations, filesystem)
//! - Handlers answer every outcome with an `Envelope` whose `meta.code` is the HTTP status

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Accounts and authentication
pub mod auth;

/// Request extractors
pub mod middleware;

/// Re-export commonly used types
pub use error::{AccountError, ServerError};
pub use server::{create_app, AppState, ServerConfig};
