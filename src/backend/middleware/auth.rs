/**
 * Authenticated User Extractor
 *
 * Protected handlers take a `CurrentUser` argument. Extraction reads the
 * `Authorization: Bearer <token>` header, verifies the token and loads the
 * user it names. A missing or bad token, or a user that no longer exists,
 * rejects the request with a 401 envelope before the handler runs. A store
 * failure while loading the user is reported as a server error instead.
 */
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};

use crate::backend::auth::users::User;
use crate::backend::error::{AccountError, ErrorEnvelope};
use crate::backend::server::state::AppState;
use crate::shared::Envelope;

/// Message of the 401 envelope
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Message of the envelope when the token is fine but the user cannot be loaded
const USER_LOOKUP_FAILED: &str = "Failed to load user";

/// The user a request is authenticated as
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

fn unauthorized() -> ErrorEnvelope {
    Envelope::error(UNAUTHORIZED_MESSAGE, StatusCode::UNAUTHORIZED.as_u16(), None)
}

/// Token part of a `Bearer` authorization header value
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ErrorEnvelope;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                unauthorized()
            })?;

        let token = bearer_token(auth_header).ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            unauthorized()
        })?;

        let user_id = state.tokens.user_id_from_token(token).map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            unauthorized()
        })?;

        // The token may outlive the account it was issued for
        let user = state.accounts.find_user(user_id).await.map_err(|e| match e {
            AccountError::NotFound => {
                tracing::warn!("Token user {} no longer exists", user_id);
                unauthorized()
            }
            other => other.into_envelope(USER_LOOKUP_FAILED),
        })?;

        Ok(CurrentUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::types::RegisterRequest;
    use crate::backend::auth::avatars::AvatarStorage;
    use crate::backend::auth::service::AccountService;
    use crate::backend::auth::sessions::TokenIssuer;
    use crate::backend::auth::users::tests::memory_pool;
    use crate::backend::auth::users::SqlxUserRepository;
    use crate::backend::error::{ErrorBody, SERVER_ERROR_MESSAGE};
    use crate::backend::server::state::test_support::{memory_state, TEST_SECRET};
    use std::sync::Arc;
    use axum::http::Request;
    use std::path::Path;

    async fn state() -> AppState {
        memory_state(Path::new("public")).await
    }

    async fn extract(state: &AppState, header: Option<String>) -> Result<CurrentUser, ErrorEnvelope> {
        let mut builder = Request::builder().uri("http://example.com/api/v1/avatars");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        CurrentUser::from_request_parts(&mut parts, state).await
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("abc"), None);
    }

    #[tokio::test]
    async fn test_extracts_registered_user() {
        let state = state().await;
        let user = state
            .accounts
            .register_user(RegisterRequest {
                email: "me@x.com".to_string(),
                password: "secret1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let token = state.tokens.generate_token(user.id).unwrap();

        let CurrentUser(current) = extract(&state, Some(format!("Bearer {}", token)))
            .await
            .unwrap();
        assert_eq!(current.id, user.id);
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let state = state().await;
        let rejection = extract(&state, None).await.unwrap_err();
        assert_eq!(rejection.meta.code, 401);
        assert_eq!(rejection.meta.message, UNAUTHORIZED_MESSAGE);
    }

    #[tokio::test]
    async fn test_invalid_token_rejected() {
        let state = state().await;
        let rejection = extract(&state, Some("Bearer not-a-jwt".to_string()))
            .await
            .unwrap_err();
        assert_eq!(rejection.meta.code, 401);
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_unauthorized() {
        let pool = memory_pool().await;
        let state = AppState::new(
            AccountService::new(Arc::new(SqlxUserRepository::new(pool.clone())), 4),
            TokenIssuer::new(Some(TEST_SECRET.to_string()), 1),
            AvatarStorage::new("public"),
        );
        let token = state.tokens.generate_token(uuid::Uuid::new_v4()).unwrap();
        pool.close().await;

        let rejection = extract(&state, Some(format!("Bearer {}", token)))
            .await
            .unwrap_err();
        assert_eq!(rejection.meta.code, 400);
        assert_eq!(rejection.meta.message, USER_LOOKUP_FAILED);
        assert_eq!(rejection.data, Some(ErrorBody::message(SERVER_ERROR_MESSAGE)));
    }

    #[tokio::test]
    async fn test_token_for_unknown_user_rejected() {
        let state = state().await;
        let token = state.tokens.generate_token(uuid::Uuid::new_v4()).unwrap();

        let rejection = extract(&state, Some(format!("Bearer {}", token)))
            .await
            .unwrap_err();
        assert_eq!(rejection.meta.code, 401);
    }
}
