//! Backend Error Module
//!
//! This module defines the error types of the backend and how they become
//! HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - `AccountError`, `ServerError` and the status code mapping
//! - **`conversion`** - `IntoResponse` for envelopes, error payloads
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::{json_rejection_envelope, ErrorBody, ErrorEnvelope};
pub use types::{AccountError, ServerError, SERVER_ERROR_MESSAGE};
