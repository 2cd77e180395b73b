//! User repository implementation.
//!
//! Users are created at registration and never mutated or deleted, so the
//! surface is lookups plus `create`. Email uniqueness is pre-checked by the
//! caller via `find_by_email`; the unique index on the column backs that
//! check up at storage level.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::domain::{User, UserRole};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address (exact, case-sensitive match)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user
    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: UserRole,
    ) -> AppResult<User>;

    /// List all users
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository over the connection pool
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        queries::find_by_email(&self.db, email).await
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: UserRole,
    ) -> AppResult<User> {
        queries::create(&self.db, email, password_hash, name, role).await
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        queries::list(&self.db).await
    }
}

/// Query implementations shared between the pooled store and the
/// transaction-scoped repository.
pub(crate) mod queries {
    use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
    use uuid::Uuid;

    use super::super::entities::user::{self, ActiveModel, Entity as UserEntity};
    use crate::domain::{User, UserRole};
    use crate::errors::{AppError, AppResult};

    pub(crate) async fn find_by_id<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    pub(crate) async fn find_by_email<C: ConnectionTrait>(
        conn: &C,
        email: &str,
    ) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(conn)
            .await
            .map_err(AppError::from)?;

        if result.is_none() {
            tracing::debug!(email, "no user found with email");
        }

        Ok(result.map(User::from))
    }

    pub(crate) async fn create<C: ConnectionTrait>(
        conn: &C,
        email: String,
        password_hash: String,
        name: String,
        role: UserRole,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            name: Set(name),
            password_hash: Set(password_hash),
            role: Set(role.to_string()),
        };

        let model = active_model.insert(conn).await.map_err(AppError::from)?;
        tracing::info!(email = %model.email, "user created");

        Ok(User::from(model))
    }

    pub(crate) async fn list<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<User>> {
        let models = UserEntity::find().all(conn).await.map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
