use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::repo_types::{User, UserChanges};

time::serde::format_description!(date_birth_format, Date, "[year]-[month]-[day]");

/// Public user representation. The password hash never leaves the repo layer.
#[derive(Debug, Serialize)]
pub struct UserDetail {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub about: Option<String>,
    #[serde(with = "date_birth_format::option")]
    pub date_birth: Option<Date>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub is_superuser: bool,
}

impl From<User> for UserDetail {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar: user.avatar,
            about: user.about,
            date_birth: user.date_birth,
            created_at: user.created_at,
            is_superuser: user.is_superuser,
        }
    }
}

/// Request body for POST /auth/signin.
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub about: Option<String>,
}

/// Request body for PUT /users/me. Absent fields stay unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub about: Option<String>,
    #[serde(default, with = "date_birth_format::option")]
    pub date_birth: Option<Date>,
}

impl From<UserUpdate> for UserChanges {
    fn from(update: UserUpdate) -> Self {
        Self {
            username: update.username,
            email: update.email,
            first_name: update.first_name,
            last_name: update.last_name,
            avatar: update.avatar,
            about: update.about,
            date_birth: update.date_birth,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
            first_name: Some("Alice".into()),
            last_name: None,
            avatar: None,
            about: Some("hi".into()),
            date_birth: Some(date!(1990 - 05 - 01)),
            created_at: OffsetDateTime::UNIX_EPOCH,
            is_superuser: false,
        }
    }

    #[test]
    fn user_detail_never_exposes_password_hash() {
        let json = serde_json::to_value(UserDetail::from(sample_user())).expect("serialize");
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "alice@example.com");
    }

    #[test]
    fn user_detail_formats_dates() {
        let json = serde_json::to_value(UserDetail::from(sample_user())).expect("serialize");
        assert_eq!(json["date_birth"], "1990-05-01");
        let created = json["created_at"].as_str().expect("created_at is a string");
        assert!(created.starts_with("1970-01-01T00:00:00"));
    }

    #[test]
    fn pagination_defaults() {
        let p: Pagination = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn user_update_is_partial() {
        let update: UserUpdate =
            serde_json::from_str(r#"{"email": "new@example.com"}"#).expect("deserialize");
        assert_eq!(update.email.as_deref(), Some("new@example.com"));
        assert!(update.username.is_none());
        assert!(update.date_birth.is_none());

        let update: UserUpdate =
            serde_json::from_str(r#"{"date_birth": "2001-12-31"}"#).expect("deserialize");
        assert_eq!(update.date_birth, Some(date!(2001 - 12 - 31)));
    }
}
