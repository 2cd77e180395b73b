//! Post service - the administrator's create/edit/delete plus public reads.
//!
//! Every mutating operation consults the authorization gate first: callers
//! without the admin role are rejected with `Forbidden` before any storage
//! work happens. Reads are open to everyone.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::POST_DATE_FORMAT;
use crate::domain::{BlogPost, PostDraft, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// All posts in storage order; empty when none exist
    async fn list_posts(&self) -> AppResult<Vec<BlogPost>>;

    /// Get post by ID; `NotFound` when absent
    async fn get_post(&self, id: Uuid) -> AppResult<BlogPost>;

    /// Create a new post authored by `author`.
    ///
    /// Admin only. The title must not be taken and the creation date is
    /// stamped at call time.
    async fn create_post(&self, author: &User, draft: PostDraft) -> AppResult<BlogPost>;

    /// Overwrite a post's mutable fields, reassigning authorship to `editor`.
    ///
    /// Admin only. Id and creation date are immutable.
    async fn update_post(&self, editor: &User, id: Uuid, draft: PostDraft) -> AppResult<BlogPost>;

    /// Delete a post and its comments.
    ///
    /// Admin only. `NotFound` when the id has no row.
    async fn delete_post(&self, caller: &User, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of PostService using Unit of Work.
pub struct PostManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PostManager<U> {
    /// Create new post service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PostService for PostManager<U> {
    async fn list_posts(&self) -> AppResult<Vec<BlogPost>> {
        self.uow.posts().list().await
    }

    async fn get_post(&self, id: Uuid) -> AppResult<BlogPost> {
        self.uow.posts().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_post(&self, author: &User, draft: PostDraft) -> AppResult<BlogPost> {
        if !author.is_admin() {
            return Err(AppError::Forbidden);
        }

        // Title pre-check; two concurrent creators can still race past it
        if self.uow.posts().find_by_title(&draft.title).await?.is_some() {
            return Err(AppError::conflict("Post"));
        }

        let author_id = author.id;
        let date = chrono::Local::now().format(POST_DATE_FORMAT).to_string();

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move { ctx.posts().create(draft, author_id, date).await })
            })
            .await
    }

    async fn update_post(&self, editor: &User, id: Uuid, draft: PostDraft) -> AppResult<BlogPost> {
        if !editor.is_admin() {
            return Err(AppError::Forbidden);
        }

        let editor_id = editor.id;

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move { ctx.posts().update(id, draft, editor_id).await })
            })
            .await
    }

    async fn delete_post(&self, caller: &User, id: Uuid) -> AppResult<()> {
        if !caller.is_admin() {
            return Err(AppError::Forbidden);
        }

        // Comments go with their post, in the same transaction
        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    ctx.posts().find_by_id(id).await?.ok_or_not_found()?;

                    let removed = ctx.comments().delete_for_post(id).await?;
                    if removed > 0 {
                        tracing::debug!(%id, removed, "cascaded comment delete");
                    }

                    ctx.posts().delete(id).await
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use crate::infra::repositories::{
        MockCommentRepository, MockPostRepository, MockUserRepository,
    };
    use crate::services::test_support::{test_user, TestUnitOfWork};

    fn draft() -> PostDraft {
        PostDraft {
            title: "Hello".to_string(),
            subtitle: "First post".to_string(),
            body: "<p>Body</p>".to_string(),
            img_url: "https://example.com/cover.jpg".to_string(),
        }
    }

    fn sample_post(id: Uuid, author_id: Uuid) -> BlogPost {
        BlogPost {
            id,
            title: "Hello".to_string(),
            subtitle: "First post".to_string(),
            body: "<p>Body</p>".to_string(),
            img_url: "https://example.com/cover.jpg".to_string(),
            date: "August 27, 2026".to_string(),
            author_id,
        }
    }

    fn service(posts: MockPostRepository) -> PostManager<TestUnitOfWork> {
        let uow = TestUnitOfWork::new(
            MockUserRepository::new(),
            posts,
            MockCommentRepository::new(),
        );
        PostManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn create_rejects_non_admin_before_any_storage_work() {
        // No expectations set: any repository call would panic the mock
        let posts = MockPostRepository::new();
        let visitor = test_user(Uuid::new_v4(), UserRole::User);

        let result = service(posts).create_post(&visitor, draft()).await;
        assert!(matches!(result.unwrap_err(), AppError::Forbidden));
    }

    #[tokio::test]
    async fn update_rejects_non_admin() {
        let posts = MockPostRepository::new();
        let visitor = test_user(Uuid::new_v4(), UserRole::User);

        let result = service(posts)
            .update_post(&visitor, Uuid::new_v4(), draft())
            .await;
        assert!(matches!(result.unwrap_err(), AppError::Forbidden));
    }

    #[tokio::test]
    async fn delete_rejects_non_admin() {
        let posts = MockPostRepository::new();
        let visitor = test_user(Uuid::new_v4(), UserRole::User);

        let result = service(posts).delete_post(&visitor, Uuid::new_v4()).await;
        assert!(matches!(result.unwrap_err(), AppError::Forbidden));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_title() {
        let admin = test_user(Uuid::new_v4(), UserRole::Admin);
        let admin_id = admin.id;

        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_title()
            .returning(move |_| Ok(Some(sample_post(Uuid::new_v4(), admin_id))));

        let result = service(posts).create_post(&admin, draft()).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn get_post_not_found() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().returning(|_| Ok(None));

        let result = service(posts).get_post(Uuid::new_v4()).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn list_posts_passes_through() {
        let author_id = Uuid::new_v4();
        let mut posts = MockPostRepository::new();
        posts.expect_list().returning(move || {
            Ok(vec![
                sample_post(Uuid::new_v4(), author_id),
                sample_post(Uuid::new_v4(), author_id),
            ])
        });

        let result = service(posts).list_posts().await;
        assert_eq!(result.unwrap().len(), 2);
    }
}
