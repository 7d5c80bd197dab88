//! Server Module
//!
//! This module contains the code that turns a configuration into a running
//! Axum application.
//!
//! # Architecture
//!
//! - **`config`** - Layered configuration loading (defaults, TOML, env)
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Database setup and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - ServerConfig and its builder
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
