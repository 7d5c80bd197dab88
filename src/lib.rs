//! Account Service - Main Library
//!
//! A small user-account REST backend built on Axum and SQLx: registration,
//! login, email-availability checks and avatar uploads, with JWT tokens
//! handed out on every successful sign-in.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types that do not depend on the server stack
//!   - Response envelope (`{meta, data}`)
//!   - Field-level validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, handlers and the authenticated-user extractor
//!   - Account service, user repository and avatar storage
//!   - JWT issuing and verification
//!   - Configuration loading and server startup
//!
//! # Usage
//!
//! ```rust,no_run
//! use account_service::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `AccountError` covers every failure of the account flow
//! - Handlers never propagate errors; each exit path renders one `Envelope`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
