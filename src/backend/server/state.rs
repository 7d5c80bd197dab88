/**
 * Application State Management
 *
 * `AppState` is the central state container shared by all handlers. It holds
 * no mutable in-process data: the account service wraps a connection pool,
 * the token issuer and avatar storage are plain configuration.
 *
 * The `FromRef` implementations let handlers extract just the part of the
 * state they need, following Axum's recommended pattern.
 */
use axum::extract::FromRef;

use crate::backend::auth::avatars::AvatarStorage;
use crate::backend::auth::service::AccountService;
use crate::backend::auth::sessions::TokenIssuer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Registration, login and profile operations
    pub accounts: AccountService,

    /// JWT issuing and verification
    pub tokens: TokenIssuer,

    /// Where uploaded avatars are written
    pub avatars: AvatarStorage,
}

impl AppState {
    pub fn new(accounts: AccountService, tokens: TokenIssuer, avatars: AvatarStorage) -> Self {
        Self {
            accounts,
            tokens,
            avatars,
        }
    }
}

impl FromRef<AppState> for AccountService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for AvatarStorage {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.avatars.clone()
    }
}
