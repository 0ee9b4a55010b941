use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{NewUser, User, UserChanges};

impl User {
    pub async fn create(db: &PgPool, new: NewUser<'_>) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, first_name, last_name, avatar, about, is_superuser)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, username, email, password_hash, first_name, last_name,
                      avatar, about, date_birth, created_at, is_superuser
            "#,
        )
        .bind(new.username)
        .bind(new.email)
        .bind(new.password_hash)
        .bind(new.first_name)
        .bind(new.last_name)
        .bind(new.avatar)
        .bind(new.about)
        .bind(new.is_superuser)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, first_name, last_name,
                   avatar, about, date_birth, created_at, is_superuser
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_username(db: &PgPool, username: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, first_name, last_name,
                   avatar, about, date_birth, created_at, is_superuser
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, first_name, last_name,
                   avatar, about, date_birth, created_at, is_superuser
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Page through all users, ordered by username. Pagination is stable only
    /// in the absence of concurrent writes.
    pub async fn list(db: &PgPool, skip: i64, limit: i64) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, first_name, last_name,
                   avatar, about, date_birth, created_at, is_superuser
            FROM users
            ORDER BY username ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(db)
        .await
    }

    /// Partial update; `None` when the id does not exist.
    pub async fn update(db: &PgPool, id: Uuid, changes: &UserChanges) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                username   = COALESCE($2, username),
                email      = COALESCE($3, email),
                first_name = COALESCE($4, first_name),
                last_name  = COALESCE($5, last_name),
                avatar     = COALESCE($6, avatar),
                about      = COALESCE($7, about),
                date_birth = COALESCE($8, date_birth)
            WHERE id = $1
            RETURNING id, username, email, password_hash, first_name, last_name,
                      avatar, about, date_birth, created_at, is_superuser
            "#,
        )
        .bind(id)
        .bind(changes.username.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(changes.avatar.as_deref())
        .bind(changes.about.as_deref())
        .bind(changes.date_birth)
        .fetch_optional(db)
        .await
    }

    /// Hard delete; false when the id does not exist.
    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
