//! Unit of Work pattern implementation.
//!
//! Every mutating operation in the core runs as one atomic sequence of reads
//! and writes: a transaction is begun per call, handed to the closure as a
//! [`TransactionContext`], and committed on success or rolled back on error
//! before the failure surfaces. No partial writes survive a failure and the
//! session is released on every exit path.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::{
    comment_repository, post_repository, user_repository, CommentRepository, CommentStore,
    PostRepository, PostStore, UserRepository, UserStore,
};
use crate::domain::{BlogPost, Comment, PostDraft, User, UserRole};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides access to the repositories and transaction management.
/// Note: the generic `transaction` method makes this trait non-mockable;
/// for testing, mock the repositories or use integration tests.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get post repository
    fn posts(&self) -> Arc<dyn PostRepository>;

    /// Get comment repository
    fn comments(&self) -> Arc<dyn CommentRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is automatically committed on success or rolled back
    /// on error. Isolation is whatever the backing store provides by
    /// default; check-then-act sequences spanning separate calls are not
    /// protected against concurrent writers.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part of the
/// same database transaction. The context borrows the transaction to ensure
/// proper lifetime management.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }

    /// Get post repository for this transaction
    pub fn posts(&self) -> TxPostRepository<'_> {
        TxPostRepository { txn: self.txn }
    }

    /// Get comment repository for this transaction
    pub fn comments(&self) -> TxCommentRepository<'_> {
        TxCommentRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork over a SeaORM connection pool
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    post_repo: Arc<PostStore>,
    comment_repo: Arc<CommentStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let post_repo = Arc::new(PostStore::new(db.clone()));
        let comment_repo = Arc::new(CommentStore::new(db.clone()));
        Self {
            db,
            user_repo,
            post_repo,
            comment_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn posts(&self) -> Arc<dyn PostRepository> {
        self.post_repo.clone()
    }

    fn comments(&self) -> Arc<dyn CommentRepository> {
        self.comment_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                // txn is owned, so commit always has something to commit
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxUserRepository<'_> {
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        user_repository::queries::find_by_id(self.txn, id).await
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        user_repository::queries::find_by_email(self.txn, email).await
    }

    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: UserRole,
    ) -> AppResult<User> {
        user_repository::queries::create(self.txn, email, password_hash, name, role).await
    }
}

/// Transaction-aware post repository.
pub struct TxPostRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxPostRepository<'_> {
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BlogPost>> {
        post_repository::queries::find_by_id(self.txn, id).await
    }

    pub async fn find_by_title(&self, title: &str) -> AppResult<Option<BlogPost>> {
        post_repository::queries::find_by_title(self.txn, title).await
    }

    pub async fn create(
        &self,
        draft: PostDraft,
        author_id: Uuid,
        date: String,
    ) -> AppResult<BlogPost> {
        post_repository::queries::create(self.txn, draft, author_id, date).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        draft: PostDraft,
        author_id: Uuid,
    ) -> AppResult<BlogPost> {
        post_repository::queries::update(self.txn, id, draft, author_id).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        post_repository::queries::delete(self.txn, id).await
    }
}

/// Transaction-aware comment repository.
pub struct TxCommentRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxCommentRepository<'_> {
    pub async fn find_by_text(&self, text: &str) -> AppResult<Option<Comment>> {
        comment_repository::queries::find_by_text(self.txn, text).await
    }

    pub async fn create(
        &self,
        text: String,
        author_id: Uuid,
        post_id: Uuid,
    ) -> AppResult<Comment> {
        comment_repository::queries::create(self.txn, text, author_id, post_id).await
    }

    pub async fn delete_for_post(&self, post_id: Uuid) -> AppResult<u64> {
        comment_repository::queries::delete_for_post(self.txn, post_id).await
    }
}
