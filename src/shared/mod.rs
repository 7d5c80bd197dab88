//! Shared Module
//!
//! This module contains the wire types that every endpoint speaks. They carry
//! no dependency on the server stack so they can be reused by clients and by
//! the integration tests to decode responses.
//!
//! # Overview
//!
//! - **`envelope`** - The `{meta, data}` wrapper returned by every endpoint
//! - **`error`** - Field-level validation errors

/// Response envelope
pub mod envelope;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use envelope::{Envelope, Meta, Status};
pub use error::{FieldError, ValidationErrors};
