//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, static files and fallback
//! - **`api_routes`** - Versioned JSON API endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint handlers
//! ```
//!
//! # Route Types
//!
//! ## API Routes
//!
//! - `POST /api/v1/users` - User registration
//! - `POST /api/v1/sessions` - User login
//! - `POST /api/v1/email_checkers` - Email availability
//! - `POST /api/v1/avatars` - Avatar upload (requires authentication)
//! - `GET /api/v1/users/fetch` - Get current user (requires authentication)
//!
//! ## Static Files
//!
//! - `GET /images/*` - Uploaded avatars, served from `<public_dir>/images`
//!
//! Anything else falls through to a 404 envelope.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
