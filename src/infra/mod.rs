//! Infrastructure layer - External systems integration
//!
//! Database connection, SeaORM repositories and the Unit of Work that
//! scopes each mutating operation to one transaction.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    CommentRepository, CommentStore, PostRepository, PostStore, UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, TransactionContext, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCommentRepository, MockPostRepository, MockUserRepository};
