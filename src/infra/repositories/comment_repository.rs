//! Comment repository implementation.
//!
//! `create` is an unconditional insert: the duplicate-text policy is composed
//! by the comment service out of `find_by_text` plus an authorship
//! comparison, not enforced here.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::domain::Comment;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// First comment with exactly matching text, if any
    async fn find_by_text(&self, text: &str) -> AppResult<Option<Comment>>;

    /// All comments on one post, in storage order
    async fn list_for_post(&self, post_id: Uuid) -> AppResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, text: String, author_id: Uuid, post_id: Uuid) -> AppResult<Comment>;

    /// Delete all comments belonging to a post, returning how many went away
    async fn delete_for_post(&self, post_id: Uuid) -> AppResult<u64>;
}

/// Concrete implementation of CommentRepository over the connection pool
pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn find_by_text(&self, text: &str) -> AppResult<Option<Comment>> {
        queries::find_by_text(&self.db, text).await
    }

    async fn list_for_post(&self, post_id: Uuid) -> AppResult<Vec<Comment>> {
        queries::list_for_post(&self.db, post_id).await
    }

    async fn create(&self, text: String, author_id: Uuid, post_id: Uuid) -> AppResult<Comment> {
        queries::create(&self.db, text, author_id, post_id).await
    }

    async fn delete_for_post(&self, post_id: Uuid) -> AppResult<u64> {
        queries::delete_for_post(&self.db, post_id).await
    }
}

/// Query implementations shared between the pooled store and the
/// transaction-scoped repository.
pub(crate) mod queries {
    use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
    use uuid::Uuid;

    use super::super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
    use crate::domain::Comment;
    use crate::errors::{AppError, AppResult};

    pub(crate) async fn find_by_text<C: ConnectionTrait>(
        conn: &C,
        text: &str,
    ) -> AppResult<Option<Comment>> {
        let result = CommentEntity::find()
            .filter(comment::Column::Text.eq(text))
            .one(conn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Comment::from))
    }

    pub(crate) async fn list_for_post<C: ConnectionTrait>(
        conn: &C,
        post_id: Uuid,
    ) -> AppResult<Vec<Comment>> {
        let models = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .all(conn)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Comment::from).collect())
    }

    pub(crate) async fn create<C: ConnectionTrait>(
        conn: &C,
        text: String,
        author_id: Uuid,
        post_id: Uuid,
    ) -> AppResult<Comment> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            text: Set(text),
            author_id: Set(author_id),
            post_id: Set(post_id),
        };

        let model = active_model.insert(conn).await.map_err(AppError::from)?;
        tracing::info!(post_id = %model.post_id, "comment created");

        Ok(Comment::from(model))
    }

    pub(crate) async fn delete_for_post<C: ConnectionTrait>(
        conn: &C,
        post_id: Uuid,
    ) -> AppResult<u64> {
        let result = CommentEntity::delete_many()
            .filter(comment::Column::PostId.eq(post_id))
            .exec(conn)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
