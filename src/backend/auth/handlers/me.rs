/**
 * Fetch Current User Handler
 *
 * GET /api/v1/users/fetch returns the profile of the authenticated user.
 * No new token is issued, so `token` is empty in the payload.
 */
use crate::backend::auth::handlers::types::UserPayload;
use crate::backend::middleware::CurrentUser;
use crate::shared::Envelope;

/// Get current user handler
pub async fn fetch_user(CurrentUser(user): CurrentUser) -> Envelope<UserPayload> {
    Envelope::success("Successfully fetch user data", UserPayload::new(&user, ""))
}
