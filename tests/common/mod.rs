//! Common test utilities and helpers
//!
//! This module provides shared utilities for the API tests including:
//! - A test server over a throwaway SQLite file and public directory
//! - Authentication test helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod server;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use server::*;
