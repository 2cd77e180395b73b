//! Blog post repository implementation.
//!
//! The creation date column is written once by `create` and deliberately
//! absent from `update`: edits rewrite title, subtitle, body, image URL and
//! author, never the stamped date or the id.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::domain::{BlogPost, PostDraft};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List all posts in storage order; empty when none exist
    async fn list(&self) -> AppResult<Vec<BlogPost>>;

    /// Find post by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BlogPost>>;

    /// Find post by exact title; used for the pre-create uniqueness check
    async fn find_by_title(&self, title: &str) -> AppResult<Option<BlogPost>>;

    /// Create a new post with the given author and creation date stamp
    async fn create(&self, draft: PostDraft, author_id: Uuid, date: String) -> AppResult<BlogPost>;

    /// Overwrite a post's mutable fields and reassign its author
    async fn update(&self, id: Uuid, draft: PostDraft, author_id: Uuid) -> AppResult<BlogPost>;

    /// Delete a post; `NotFound` when the id has no row
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of PostRepository over the connection pool
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn list(&self) -> AppResult<Vec<BlogPost>> {
        queries::list(&self.db).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BlogPost>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<BlogPost>> {
        queries::find_by_title(&self.db, title).await
    }

    async fn create(&self, draft: PostDraft, author_id: Uuid, date: String) -> AppResult<BlogPost> {
        queries::create(&self.db, draft, author_id, date).await
    }

    async fn update(&self, id: Uuid, draft: PostDraft, author_id: Uuid) -> AppResult<BlogPost> {
        queries::update(&self.db, id, draft, author_id).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        queries::delete(&self.db, id).await
    }
}

/// Query implementations shared between the pooled store and the
/// transaction-scoped repository.
pub(crate) mod queries {
    use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
    use uuid::Uuid;

    use super::super::entities::post::{self, ActiveModel, Entity as PostEntity};
    use crate::domain::{BlogPost, PostDraft};
    use crate::errors::{AppError, AppResult};

    pub(crate) async fn list<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<BlogPost>> {
        let models = PostEntity::find().all(conn).await.map_err(AppError::from)?;

        Ok(models.into_iter().map(BlogPost::from).collect())
    }

    pub(crate) async fn find_by_id<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> AppResult<Option<BlogPost>> {
        let result = PostEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(BlogPost::from))
    }

    pub(crate) async fn find_by_title<C: ConnectionTrait>(
        conn: &C,
        title: &str,
    ) -> AppResult<Option<BlogPost>> {
        let result = PostEntity::find()
            .filter(post::Column::Title.eq(title))
            .one(conn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(BlogPost::from))
    }

    pub(crate) async fn create<C: ConnectionTrait>(
        conn: &C,
        draft: PostDraft,
        author_id: Uuid,
        date: String,
    ) -> AppResult<BlogPost> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(draft.title),
            subtitle: Set(draft.subtitle),
            body: Set(draft.body),
            img_url: Set(draft.img_url),
            date: Set(date),
            author_id: Set(author_id),
        };

        let model = active_model.insert(conn).await.map_err(AppError::from)?;
        tracing::info!(title = %model.title, "post created");

        Ok(BlogPost::from(model))
    }

    pub(crate) async fn update<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        draft: PostDraft,
        author_id: Uuid,
    ) -> AppResult<BlogPost> {
        let post = PostEntity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = post.into();
        active.title = Set(draft.title);
        active.subtitle = Set(draft.subtitle);
        active.body = Set(draft.body);
        active.img_url = Set(draft.img_url);
        active.author_id = Set(author_id);
        // id and date stay untouched

        let model = active.update(conn).await.map_err(AppError::from)?;
        tracing::info!(title = %model.title, "post updated");

        Ok(BlogPost::from(model))
    }

    pub(crate) async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<()> {
        let result = PostEntity::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        tracing::info!(%id, "post deleted");
        Ok(())
    }
}
