//! Authentication Handlers Module
//!
//! HTTP handlers for the account endpoints. Each handler parses its input,
//! calls the account service and renders exactly one envelope per request.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - Request/response types and validation
//! ├── register.rs     - User registration handler
//! ├── login.rs        - User authentication handler
//! ├── check_email.rs  - Email availability handler
//! ├── avatar.rs       - Avatar upload handler
//! └── me.rs           - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register_user`** - POST /api/v1/users
//! - **`login`** - POST /api/v1/sessions
//! - **`check_email`** - POST /api/v1/email_checkers
//! - **`upload_avatar`** - POST /api/v1/avatars (authenticated)
//! - **`fetch_user`** - GET /api/v1/users/fetch (authenticated)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Email availability handler
pub mod check_email;

/// Avatar upload handler
pub mod avatar;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{
    AvatarUpload, CheckEmailRequest, EmailAvailability, LoginRequest, RegisterRequest, UserPayload,
};

// Re-export handlers
pub use avatar::upload_avatar;
pub use check_email::check_email;
pub use login::login;
pub use me::fetch_user;
pub use register::register_user;
