//! Authentication service - registration and credential verification.
//!
//! Composes the user repository with the `Password` value object. The
//! email-uniqueness pre-check and the insert are separate calls; the unique
//! index on the column is the backstop under concurrent registration.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with the default role.
    ///
    /// Fails with `Conflict` when the email is already registered.
    async fn register(&self, email: String, password: String, name: String) -> AppResult<User>;

    /// Verify credentials and return the matching user.
    ///
    /// Unknown email and wrong password both surface as
    /// `InvalidCredentials`.
    async fn login(&self, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, email: String, password: String, name: String) -> AppResult<User> {
        // Pre-check; the repository itself does not re-check uniqueness
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    ctx.users()
                        .create(email, password_hash, name, UserRole::User)
                        .await
                })
            })
            .await
    }

    async fn login(&self, email: String, password: String) -> AppResult<User> {
        let user_result = self.uow.users().find_by_email(&email).await?;

        // Verify against a dummy hash when the user does not exist, so the
        // two failure cases take comparable time
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let password_hash = match &user_result {
            Some(user) => user.password_hash.as_str(),
            None => dummy_hash,
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        match user_result {
            Some(user) if password_valid => Ok(user),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{
        MockCommentRepository, MockPostRepository, MockUserRepository,
    };
    use crate::services::test_support::{test_user, TestUnitOfWork};
    use uuid::Uuid;

    fn service(users: MockUserRepository) -> Authenticator<TestUnitOfWork> {
        let uow = TestUnitOfWork::new(
            users,
            MockPostRepository::new(),
            MockCommentRepository::new(),
        );
        Authenticator::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(test_user(Uuid::new_v4(), UserRole::User))));

        let result = service(users)
            .register(
                "taken@example.com".to_string(),
                "password123".to_string(),
                "Somebody".to_string(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let result = service(users)
            .register(
                "new@example.com".to_string(),
                "short".to_string(),
                "Somebody".to_string(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn login_unknown_email_is_invalid_credentials() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let result = service(users)
            .login("ghost@example.com".to_string(), "whatever123".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_wrong_password_is_invalid_credentials() {
        let password_hash = Password::new("correct-horse-1").unwrap().into_string();
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(move |_| {
            let mut user = test_user(Uuid::new_v4(), UserRole::User);
            user.password_hash = password_hash.clone();
            Ok(Some(user))
        });

        let result = service(users)
            .login("a@example.com".to_string(), "wrong-password".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_correct_password_returns_user() {
        let password_hash = Password::new("correct-horse-1").unwrap().into_string();
        let id = Uuid::new_v4();
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(move |_| {
            let mut user = test_user(id, UserRole::User);
            user.password_hash = password_hash.clone();
            Ok(Some(user))
        });

        let user = service(users)
            .login("a@example.com".to_string(), "correct-horse-1".to_string())
            .await
            .unwrap();

        assert_eq!(user.id, id);
    }
}
