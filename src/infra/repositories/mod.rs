//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence, one per
//! persisted entity. The traits are the seams the services depend on; the
//! `*Store` types run against the shared connection pool, while their
//! transaction-scoped twins live in [`crate::infra::unit_of_work`].

pub(crate) mod comment_repository;
pub(crate) mod entities;
pub(crate) mod post_repository;
pub(crate) mod user_repository;

pub use comment_repository::{CommentRepository, CommentStore};
pub use post_repository::{PostRepository, PostStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use post_repository::MockPostRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
