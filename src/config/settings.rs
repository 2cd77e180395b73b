//! Application settings loaded from environment variables.

use std::env;

use super::constants::DEFAULT_DATABASE_URL;

/// Application configuration.
///
/// The connection string is resolved once at process start; the admin
/// credentials are only consulted when seeding the administrator account.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub admin_email: Option<String>,
    pub admin_name: Option<String>,
    pub admin_password: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("admin_email", &self.admin_email)
            .field("admin_name", &self.admin_name)
            .field("admin_password", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            admin_email: env::var("ADMIN_EMAIL").ok(),
            admin_name: env::var("ADMIN_NAME").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
        }
    }
}
