/**
 * Account Service
 *
 * Registration, login, email availability and avatar bookkeeping on top of a
 * `UserRepository`. Input validation happens here so every caller gets the
 * same rules; handlers only translate results into envelopes.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Check if the email is already taken
 * 3. Hash password using bcrypt
 * 4. Create user in the store
 *
 * Emails match case-insensitively (the `users.email` column is
 * `COLLATE NOCASE`) and are stored as given after trimming.
 *
 * The pre-check in step 2 is an early exit only. Two concurrent registrations
 * can both pass it; the store's unique constraint decides, and its violation
 * is reported as `DuplicateEmail` too.
 */
use std::sync::Arc;

use bcrypt::{hash, verify};
use uuid::Uuid;

use crate::backend::auth::handlers::types::{CheckEmailRequest, LoginRequest, RegisterRequest};
use crate::backend::auth::users::{NewUser, User, UserRepository};
use crate::backend::error::AccountError;

/// User account operations
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// Validate, hash and persist a new user
    pub async fn register_user(&self, input: RegisterRequest) -> Result<User, AccountError> {
        input.validate()?;
        let email = input.email.trim().to_string();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AccountError::DuplicateEmail);
        }

        let password_hash = hash(&input.password, self.bcrypt_cost)?;

        let new_user = NewUser {
            name: input.name.trim().to_string(),
            occupation: input.occupation.trim().to_string(),
            email,
            password_hash,
        };

        self.users.create(new_user).await.map_err(|e| {
            if is_unique_violation(&e) {
                AccountError::DuplicateEmail
            } else {
                AccountError::Storage(e)
            }
        })
    }

    /// Check credentials and return the matching user
    pub async fn login(&self, input: LoginRequest) -> Result<User, AccountError> {
        input.validate()?;

        let user = self
            .users
            .find_by_email(input.email.trim())
            .await?
            .ok_or(AccountError::NotFound)?;

        if !verify(&input.password, &user.password_hash)? {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(user)
    }

    /// `true` when no account uses the email yet
    pub async fn is_email_available(&self, input: CheckEmailRequest) -> Result<bool, AccountError> {
        input.validate()?;

        let user = self.users.find_by_email(input.email.trim()).await?;
        Ok(user.is_none())
    }

    /// Record the avatar path of an existing user
    pub async fn save_avatar(&self, user_id: Uuid, path: &str) -> Result<User, AccountError> {
        self.users
            .update_avatar(user_id, path)
            .await?
            .ok_or(AccountError::NotFound)
    }

    /// Get a user by ID
    pub async fn find_user(&self, user_id: Uuid) -> Result<User, AccountError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::NotFound)
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
