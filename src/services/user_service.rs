//! User service - lookups for the session layer.
//!
//! The web layer loads the current user by id on every request and by email
//! during login; both are read-only and need no authorization.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::User;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID; `NotFound` when absent
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Find user by email; nothing-found is not an error
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all registered users
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.uow.users().find_by_id(id).await?.ok_or_not_found()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.uow.users().find_by_email(email).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }
}
