//! Comment service - replies from authenticated users.
//!
//! Composes the duplicate-text policy out of `find_by_text` and an
//! authorship comparison: the same user never persists identical text twice,
//! while two different users may each leave that exact text.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Comment, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Comment service trait for dependency injection.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Add a comment by `author` to the given post.
    ///
    /// `NotFound` when the post does not exist; `Conflict` when the author
    /// already left a comment with this exact text.
    async fn add_comment(&self, author: &User, post_id: Uuid, text: String) -> AppResult<Comment>;

    /// All comments on one post, for rendering under it
    async fn comments_for_post(&self, post_id: Uuid) -> AppResult<Vec<Comment>>;
}

/// Concrete implementation of CommentService using Unit of Work.
pub struct CommentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CommentManager<U> {
    /// Create new comment service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CommentService for CommentManager<U> {
    async fn add_comment(&self, author: &User, post_id: Uuid, text: String) -> AppResult<Comment> {
        self.uow.posts().find_by_id(post_id).await?.ok_or_not_found()?;

        // The duplicate check and the insert are separate calls; the policy
        // is best-effort under concurrent commenters
        if let Some(existing) = self.uow.comments().find_by_text(&text).await? {
            if existing.author_id == author.id {
                return Err(AppError::conflict("Comment"));
            }
        }

        let author_id = author.id;

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move { ctx.comments().create(text, author_id, post_id).await })
            })
            .await
    }

    async fn comments_for_post(&self, post_id: Uuid) -> AppResult<Vec<Comment>> {
        self.uow.comments().list_for_post(post_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlogPost, UserRole};
    use crate::infra::repositories::{
        MockCommentRepository, MockPostRepository, MockUserRepository,
    };
    use crate::services::test_support::{test_user, TestUnitOfWork};

    fn sample_post(id: Uuid) -> BlogPost {
        BlogPost {
            id,
            title: "Hello".to_string(),
            subtitle: "First post".to_string(),
            body: "<p>Body</p>".to_string(),
            img_url: "https://example.com/cover.jpg".to_string(),
            date: "August 27, 2026".to_string(),
            author_id: Uuid::new_v4(),
        }
    }

    fn service(
        posts: MockPostRepository,
        comments: MockCommentRepository,
    ) -> CommentManager<TestUnitOfWork> {
        let uow = TestUnitOfWork::new(MockUserRepository::new(), posts, comments);
        CommentManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn add_comment_missing_post_is_not_found() {
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_id().returning(|_| Ok(None));

        let author = test_user(Uuid::new_v4(), UserRole::User);
        let result = service(posts, MockCommentRepository::new())
            .add_comment(&author, Uuid::new_v4(), "nice".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn repeated_text_from_same_author_is_rejected() {
        let author = test_user(Uuid::new_v4(), UserRole::User);
        let author_id = author.id;
        let post_id = Uuid::new_v4();

        let mut posts = MockPostRepository::new();
        posts
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_post(id))));

        let mut comments = MockCommentRepository::new();
        comments.expect_find_by_text().returning(move |text| {
            Ok(Some(Comment {
                id: Uuid::new_v4(),
                text: text.to_string(),
                author_id,
                post_id,
            }))
        });

        let result = service(posts, comments)
            .add_comment(&author, post_id, "nice".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn comments_for_post_passes_through() {
        let post_id = Uuid::new_v4();
        let mut comments = MockCommentRepository::new();
        comments.expect_list_for_post().returning(|post_id| {
            Ok(vec![Comment {
                id: Uuid::new_v4(),
                text: "nice".to_string(),
                author_id: Uuid::new_v4(),
                post_id,
            }])
        });

        let result = service(MockPostRepository::new(), comments)
            .comments_for_post(post_id)
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }
}
