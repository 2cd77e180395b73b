//! Domain layer - Core business entities and logic
//!
//! The entities persisted by the blog (users, posts, comments) and the
//! password value object. No infrastructure concerns live here.

pub mod comment;
pub mod password;
pub mod post;
pub mod user;

pub use comment::Comment;
pub use password::Password;
pub use post::{BlogPost, PostDraft};
pub use user::{User, UserRole};
