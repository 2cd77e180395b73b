//! Blog post domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published article.
///
/// `date` is the human-readable calendar date captured at creation time and
/// never rewritten, even when the post is edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    /// Unique across all posts (pre-checked at creation, no storage constraint)
    pub title: String,
    pub subtitle: String,
    /// Rich text body as produced by the editor widget
    pub body: String,
    pub img_url: String,
    pub date: String,
    pub author_id: Uuid,
}

/// The mutable fields of a post, as submitted by the (already validated)
/// web form. Used for both creation and edits.
#[derive(Debug, Clone, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
}
