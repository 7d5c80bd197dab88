//! Authentication Module
//!
//! This module handles user accounts: registration, login, email
//! availability, avatars and JWT tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and the `UserRepository` store
//! - **`sessions`** - JWT token generation and validation
//! - **`service`** - `AccountService`, the account rules on top of the store
//! - **`avatars`** - Avatar file storage under the public directory
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Account service
//! ├── avatars.rs      - Avatar storage
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs          - Handler exports
//!     ├── types.rs        - Request/response types
//!     ├── register.rs     - User registration handler
//!     ├── login.rs        - User authentication handler
//!     ├── check_email.rs  - Email availability handler
//!     ├── avatar.rs       - Avatar upload handler
//!     └── me.rs           - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, occupation, email and password → user created → JWT token returned
//! 2. **Login**: email and password → credentials verified → JWT token returned
//! 3. **Authenticated calls**: JWT token → token verified → user loaded by `CurrentUser`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage and never serialized
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after 30 days unless configured otherwise
//! - Every token carries a random `jti`, so two logins never share a token

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Account rules on top of the user store
pub mod service;

/// Avatar file storage
pub mod avatars;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use avatars::AvatarStorage;
pub use handlers::types::{CheckEmailRequest, LoginRequest, RegisterRequest, UserPayload};
pub use handlers::{check_email, fetch_user, login, register_user, upload_avatar};
pub use service::AccountService;
pub use sessions::{TokenError, TokenIssuer};
pub use users::{SqlxUserRepository, User, UserRepository};
