//! Comment domain entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reply to a post. Comments are never edited once persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
}
