/**
 * Session Tokens
 *
 * This module issues and verifies the JWTs handed out by register and login.
 * Tokens are stateless: nothing is stored server-side, a token is valid as
 * long as its signature checks out and it has not expired.
 */
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Default token lifetime: 30 days
pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 30 * 24;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Random token ID, makes every issued token unique
    pub jti: String,
}

/// Token signing and verification failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// No signing secret is configured
    #[error("token signing key is not configured")]
    MissingKey,

    /// Encoding, decoding or validation failed
    #[error("token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The configured lifetime does not fit in a Unix timestamp
    #[error("token lifetime of {0} hours is too large")]
    ExpiryOverflow(u64),

    /// The `sub` claim is not a user ID
    #[error("invalid subject in token: {0}")]
    InvalidSubject(String),
}

/// Issues and verifies HS256 session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    secret: Option<String>,
    ttl_hours: u64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

impl TokenIssuer {
    /// Create an issuer; a missing or empty secret makes every signing attempt fail
    pub fn new(secret: Option<String>, ttl_hours: u64) -> Self {
        let secret = secret.filter(|s| !s.is_empty());
        Self { secret, ttl_hours }
    }

    fn secret(&self) -> Result<&str, TokenError> {
        self.secret.as_deref().ok_or(TokenError::MissingKey)
    }

    /// Create a signed token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID (UUID)
    ///
    /// # Returns
    /// JWT token string
    pub fn generate_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        let secret = self.secret()?;
        let now = jsonwebtoken::get_current_timestamp();
        let exp = self
            .ttl_hours
            .checked_mul(60 * 60)
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or(TokenError::ExpiryOverflow(self.ttl_hours))?;

        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        let key = EncodingKey::from_secret(secret.as_bytes());
        Ok(encode(&Header::default(), &claims, &key)?)
    }

    /// Verify and decode a token
    ///
    /// # Returns
    /// Decoded claims or error
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        let secret = self.secret()?;
        let key = DecodingKey::from_secret(secret.as_bytes());

        let token_data = decode::<Claims>(token, &key, &Validation::default())?;
        Ok(token_data.claims)
    }

    /// Extract the user ID from a token
    pub fn user_id_from_token(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.verify_token(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| TokenError::InvalidSubject(claims.sub))
    }
}
