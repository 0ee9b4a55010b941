use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use super::jwt::JwtKeys;
use crate::{error::ApiError, state::AppState, users::repo_types::User, users::service as user_service};

/// Extracts the bearer token and resolves its subject to the calling user's
/// row. Every failure mode (missing header, bad scheme, bad token, unknown
/// subject) is the same generic 401.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::InvalidToken)?;

        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or(ApiError::InvalidToken)?;

        let keys = JwtKeys::from_ref(state);
        let username = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token rejected");
            ApiError::InvalidToken
        })?;

        // A token for a since-deleted user fails here.
        let user = match user_service::get_user_by_username(&state.db, &username).await {
            Ok(user) => user,
            Err(ApiError::NotFound { .. }) => return Err(ApiError::InvalidToken),
            Err(e) => return Err(e),
        };

        Ok(CurrentUser(user))
    }
}
