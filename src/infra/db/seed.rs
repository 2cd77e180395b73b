//! Startup seeding for the designated administrator account.
//!
//! The administrator is an ordinary user row carrying the admin role flag,
//! created from configuration when it does not exist yet. Seeding is
//! idempotent: an existing account is left alone.

use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::domain::{Password, User, UserRole};
use crate::errors::AppResult;
use crate::infra::repositories::{UserRepository, UserStore};

/// Seed the administrator account from configuration.
///
/// Returns `None` when the configuration carries no admin credentials, the
/// existing account when one is already registered under the configured
/// email, or the freshly created account.
pub async fn ensure_admin(db: &DatabaseConnection, config: &Config) -> AppResult<Option<User>> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::debug!("no admin credentials configured, skipping seed");
        return Ok(None);
    };

    let users = UserStore::new(db.clone());

    if let Some(existing) = users.find_by_email(email).await? {
        return Ok(Some(existing));
    }

    let name = config
        .admin_name
        .clone()
        .unwrap_or_else(|| "Administrator".to_string());
    let password_hash = Password::new(password)?.into_string();

    let admin = users
        .create(email.clone(), password_hash, name, UserRole::Admin)
        .await?;

    tracing::info!(email = %admin.email, "seeded administrator account");
    Ok(Some(admin))
}
