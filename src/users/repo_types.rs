use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Full row from the `users` table.
///
/// Carries the password hash, so it is never serialized directly; API output
/// goes through `UserDetail`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub about: Option<String>,
    pub date_birth: Option<Date>,
    pub created_at: OffsetDateTime,
    pub is_superuser: bool,
}

/// Insert payload. Id and creation timestamp are assigned by the database.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub avatar: Option<&'a str>,
    pub about: Option<&'a str>,
    pub is_superuser: bool,
}

/// Allow-listed partial update. `None` leaves the column untouched; only the
/// fields named here can ever be written by an update.
#[derive(Debug, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub about: Option<String>,
    pub date_birth: Option<Date>,
}
