//! Application services layer - Use cases and business logic.
//!
//! Services are the contract surface the web layer calls. They compose the
//! repositories behind the Unit of Work, gate mutating post operations on
//! the administrator role, and run every write inside one transaction.
//! Caller identity is always an explicit parameter, never ambient state.

mod auth_service;
mod comment_service;
pub mod container;
mod post_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use comment_service::{CommentManager, CommentService};
pub use post_service::{PostManager, PostService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::domain::{User, UserRole};
    use crate::errors::{AppError, AppResult};
    use crate::infra::repositories::{
        CommentRepository, MockCommentRepository, MockPostRepository, MockUserRepository,
        PostRepository, UserRepository,
    };
    use crate::infra::unit_of_work::{TransactionContext, UnitOfWork};

    /// UnitOfWork stub wrapping mock repositories.
    ///
    /// Transactions are not supported here; mutation success paths are
    /// exercised by the integration tests against a real store.
    pub struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
        posts: Arc<MockPostRepository>,
        comments: Arc<MockCommentRepository>,
    }

    impl TestUnitOfWork {
        pub fn new(
            users: MockUserRepository,
            posts: MockPostRepository,
            comments: MockCommentRepository,
        ) -> Self {
            Self {
                users: Arc::new(users),
                posts: Arc::new(posts),
                comments: Arc::new(comments),
            }
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn posts(&self) -> Arc<dyn PostRepository> {
            self.posts.clone()
        }

        fn comments(&self) -> Arc<dyn CommentRepository> {
            self.comments.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }

    pub fn test_user(id: Uuid, role: UserRole) -> User {
        User {
            id,
            email: format!("{}@example.com", id.simple()),
            name: "Test User".to_string(),
            password_hash: "hashed".to_string(),
            role,
        }
    }
}
