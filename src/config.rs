use anyhow::Context;
use jsonwebtoken::Algorithm;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub ttl_minutes: i64,
}

/// Bootstrap admin account, seeded at startup when username, email and
/// password are all configured.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub about: Option<String>,
    pub superuser: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub database_echo: bool,
    pub jwt: JwtConfig,
    pub admin: Option<AdminConfig>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;

        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            algorithm: parse_algorithm(
                &std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".into()),
            )?,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };

        let admin = match (
            std::env::var("ADMIN_USERNAME").ok(),
            std::env::var("ADMIN_EMAIL").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        ) {
            (Some(username), Some(email), Some(password)) => Some(AdminConfig {
                username,
                email,
                password,
                first_name: std::env::var("ADMIN_FIRST_NAME").ok(),
                last_name: std::env::var("ADMIN_LAST_NAME").ok(),
                avatar: std::env::var("ADMIN_AVATAR").ok(),
                about: std::env::var("ADMIN_ABOUT").ok(),
                superuser: env_flag("ADMIN_SUPERUSER", true),
            }),
            _ => None,
        };

        Ok(Self {
            database_url,
            database_echo: env_flag("DATABASE_ECHO", false),
            jwt,
            admin,
        })
    }
}

/// Keys are derived from a shared secret, so only the HMAC family applies.
fn parse_algorithm(name: &str) -> anyhow::Result<Algorithm> {
    match name {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => anyhow::bail!("unsupported JWT_ALGORITHM: {other}"),
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "True"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmac_algorithm_names_parse() {
        assert!(matches!(parse_algorithm("HS256"), Ok(Algorithm::HS256)));
        assert!(matches!(parse_algorithm("HS384"), Ok(Algorithm::HS384)));
        assert!(matches!(parse_algorithm("HS512"), Ok(Algorithm::HS512)));
    }

    #[test]
    fn non_hmac_algorithm_is_rejected() {
        assert!(parse_algorithm("RS256").is_err());
        assert!(parse_algorithm("none").is_err());
    }
}
