/**
 * User Model and Database Operations
 *
 * This module holds the `User` row type and the storage collaborator the
 * account service talks to. `UserRepository` is the seam; `SqlxUserRepository`
 * is the SQLite-backed implementation used by the server and the tests.
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name (may be empty)
    pub name: String,
    /// Occupation (may be empty)
    pub occupation: String,
    /// User email address, unique
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Public path of the uploaded avatar, relative to the public directory
    pub avatar_path: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub occupation: String,
    pub email: String,
    pub password_hash: String,
}

/// Persistent storage for user records
///
/// Implementations must enforce email uniqueness atomically; `create` reports
/// a conflicting insert as a database error for which
/// `is_unique_violation()` is true.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored row
    async fn create(&self, user: NewUser) -> Result<User, sqlx::Error>;

    /// Get user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;

    /// Get user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error>;

    /// Set the avatar path; `None` when no user has this ID
    async fn update_avatar(&self, id: Uuid, avatar_path: &str) -> Result<Option<User>, sqlx::Error>;
}

/// SQLite-backed user repository
#[derive(Debug, Clone)]
pub struct SqlxUserRepository {
    pool: SqlitePool,
}

impl SqlxUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, sqlx::Error> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, occupation, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, occupation, email, password_hash, avatar_path, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.occupation)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, occupation, email, password_hash, avatar_path, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, occupation, email, password_hash, avatar_path, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update_avatar(&self, id: Uuid, avatar_path: &str) -> Result<Option<User>, sqlx::Error> {
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET avatar_path = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, occupation, email, password_hash, avatar_path, created_at, updated_at
            "#,
        )
        .bind(avatar_path)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
