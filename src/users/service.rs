use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{
    dto::UserCreate,
    repo_types::{NewUser, User, UserChanges},
};
use crate::{auth::password, config::AdminConfig, error::ApiError};

/// Register a new user.
///
/// Email is probed before username, so when both collide the email conflict
/// is the one reported. Probes are a courtesy; a concurrent duplicate insert
/// still surfaces as a conflict through the unique constraint.
pub async fn create_user(db: &PgPool, input: UserCreate) -> Result<User, ApiError> {
    if User::find_by_email(db, &input.email).await?.is_some() {
        return Err(ApiError::Conflict { field: "email" });
    }
    if User::find_by_username(db, &input.username).await?.is_some() {
        return Err(ApiError::Conflict { field: "username" });
    }

    let password_hash = password::hash_password(&input.password)?;
    let user = User::create(
        db,
        NewUser {
            username: &input.username,
            email: &input.email,
            password_hash: &password_hash,
            first_name: input.first_name.as_deref(),
            last_name: input.last_name.as_deref(),
            avatar: input.avatar.as_deref(),
            about: input.about.as_deref(),
            is_superuser: false,
        },
    )
    .await?;
    Ok(user)
}

/// Apply a partial profile update, refusing email/username values owned by
/// another user. Matching one's own current value is not a conflict.
pub async fn update_user(
    db: &PgPool,
    current: &User,
    changes: &UserChanges,
) -> Result<User, ApiError> {
    if let Some(email) = changes.email.as_deref() {
        if let Some(existing) = User::find_by_email(db, email).await? {
            if existing.id != current.id {
                return Err(ApiError::Conflict { field: "email" });
            }
        }
    }
    if let Some(username) = changes.username.as_deref() {
        if let Some(existing) = User::find_by_username(db, username).await? {
            if existing.id != current.id {
                return Err(ApiError::Conflict { field: "username" });
            }
        }
    }

    User::update(db, current.id, changes)
        .await?
        .ok_or(ApiError::NotFound { entity: "user" })
}

pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    if !User::delete(db, id).await? {
        return Err(ApiError::NotFound { entity: "user" });
    }
    Ok(())
}

pub async fn get_user_by_id(db: &PgPool, id: Uuid) -> Result<User, ApiError> {
    User::find_by_id(db, id)
        .await?
        .ok_or(ApiError::NotFound { entity: "user" })
}

pub async fn get_user_by_username(db: &PgPool, username: &str) -> Result<User, ApiError> {
    User::find_by_username(db, username)
        .await?
        .ok_or(ApiError::NotFound { entity: "user" })
}

pub async fn list_users(db: &PgPool, skip: i64, limit: i64) -> Result<Vec<User>, ApiError> {
    Ok(User::list(db, skip, limit).await?)
}

/// Seed the bootstrap admin account when configured and not yet present.
pub async fn ensure_admin(db: &PgPool, cfg: &AdminConfig) -> anyhow::Result<()> {
    if User::find_by_username(db, &cfg.username).await?.is_some() {
        return Ok(());
    }

    let password_hash = password::hash_password(&cfg.password)?;
    let user = User::create(
        db,
        NewUser {
            username: &cfg.username,
            email: &cfg.email,
            password_hash: &password_hash,
            first_name: cfg.first_name.as_deref(),
            last_name: cfg.last_name.as_deref(),
            avatar: cfg.avatar.as_deref(),
            about: cfg.about.as_deref(),
            is_superuser: cfg.superuser,
        },
    )
    .await?;
    info!(user_id = %user.id, username = %user.username, "bootstrap admin created");
    Ok(())
}
