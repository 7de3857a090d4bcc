//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    MAX_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH,
};
use crate::domain::ListScope;

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
    /// What a caller without list-all permission sees on `GET /api/reimbursements`
    pub list_scope: ListScope,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("list_scope", &self.list_scope)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set or is too short (security requirement).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        let list_scope = match env::var("REIMBURSEMENT_LIST_SCOPE") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Unknown REIMBURSEMENT_LIST_SCOPE '{}', falling back to '{}'",
                    raw,
                    ListScope::default()
                );
                ListScope::default()
            }),
            Err(_) => ListScope::default(),
        };

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            jwt_expiration_hours: expiration_hours(env::var("JWT_EXPIRATION_HOURS").ok()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            list_scope,
        }
    }

    /// Build a configuration around an explicit signing secret.
    ///
    /// Everything else takes its default value. Used by tests and tooling
    /// that must not depend on the process environment.
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: jwt_secret.into(),
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            list_scope: ListScope::default(),
        }
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Token lifetime from `JWT_EXPIRATION_HOURS`, clamped to 1..=MAX_JWT_EXPIRATION_HOURS
fn expiration_hours(raw: Option<String>) -> i64 {
    let Some(hours) = raw.and_then(|v| v.trim().parse::<i64>().ok()) else {
        return DEFAULT_JWT_EXPIRATION_HOURS;
    };

    let clamped = hours.clamp(1, MAX_JWT_EXPIRATION_HOURS);
    if clamped != hours {
        tracing::warn!(
            "JWT_EXPIRATION_HOURS={} out of range, using {}",
            hours,
            clamped
        );
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_secrets() {
        let config = Config::with_secret("a-very-long-secret-value-for-tests!!");
        let rendered = format!("{:?}", config);

        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("a-very-long-secret-value-for-tests!!"));
        assert!(rendered.contains("list_scope"));
    }

    #[test]
    fn defaults_keep_full_listing() {
        let config = Config::with_secret("a-very-long-secret-value-for-tests!!");

        assert_eq!(config.list_scope, ListScope::All);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn expiration_hours_are_clamped() {
        assert_eq!(expiration_hours(None), DEFAULT_JWT_EXPIRATION_HOURS);
        assert_eq!(expiration_hours(Some("soon".to_string())), DEFAULT_JWT_EXPIRATION_HOURS);
        assert_eq!(expiration_hours(Some(" 48 ".to_string())), 48);
        assert_eq!(expiration_hours(Some("0".to_string())), 1);
        assert_eq!(
            expiration_hours(Some(i64::MAX.to_string())),
            MAX_JWT_EXPIRATION_HOURS
        );
    }
}
