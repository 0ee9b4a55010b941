use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Form, Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument};

use super::{
    dto::{LoginForm, TokenResponse},
    jwt::JwtKeys,
    service,
};
use crate::{
    error::ApiError,
    state::AppState,
    users::{dto::UserCreate, dto::UserDetail, service as user_service},
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/signin", post(signin))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/login", post(admin_login))
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = service::authenticate_user(&state.db, &form.username, &form.password).await?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.username)?;

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(TokenResponse::bearer(token)))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    Json(mut payload): Json<UserCreate>,
) -> Result<(StatusCode, Json<UserDetail>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        return Err(ApiError::Validation("invalid email"));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::Validation("password too short"));
    }

    let user = user_service::create_user(&state.db, payload).await?;
    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((StatusCode::CREATED, Json(UserDetail::from(user))))
}

/// Admin-panel login: same credential flow, plus the superuser requirement.
#[instrument(skip(state, form))]
pub async fn admin_login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = service::authenticate_superuser(&state.db, &form.username, &form.password).await?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.username)?;

    info!(user_id = %user.id, username = %user.username, "superuser logged in");
    Ok(Json(TokenResponse::bearer(token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_regex_accepts_plain_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn email_regex_rejects_junk() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
    }
}
