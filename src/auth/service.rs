use sqlx::PgPool;
use tracing::warn;

use super::password;
use crate::{error::ApiError, users::repo_types::User};

/// Resolve a username/password pair to a user row.
///
/// An unknown username and a wrong password are indistinguishable to the
/// caller; both come back as `BadCredentials`.
pub async fn authenticate_user(
    db: &PgPool,
    username: &str,
    password_plain: &str,
) -> Result<User, ApiError> {
    let Some(user) = User::find_by_username(db, username).await? else {
        warn!(username = %username, "login for unknown username");
        return Err(ApiError::BadCredentials);
    };
    if !password::verify_password(password_plain, &user.password_hash)? {
        warn!(username = %username, user_id = %user.id, "login with wrong password");
        return Err(ApiError::BadCredentials);
    }
    Ok(user)
}

/// Authenticate and additionally require the superuser flag.
pub async fn authenticate_superuser(
    db: &PgPool,
    username: &str,
    password_plain: &str,
) -> Result<User, ApiError> {
    let user = authenticate_user(db, username, password_plain).await?;
    if !user.is_superuser {
        warn!(username = %username, user_id = %user.id, "admin login without superuser flag");
        return Err(ApiError::Forbidden);
    }
    Ok(user)
}
