//! inkpress - persistence and authorization core of a multi-user blog
//!
//! Visitors read posts and comments, registered users comment, and a single
//! administrator authors, edits and deletes posts. This crate is the layer
//! underneath the web adapters: the persisted entities, the repositories
//! that create, retrieve, mutate and delete them, and the credential and
//! role checks that gate write access.
//!
//! # Architecture Layers
//!
//! - **config**: Environment configuration and constants
//! - **domain**: Core business entities and the password value object
//! - **services**: Application use cases; the contract surface for the web
//!   layer, with caller identity passed in explicitly
//! - **infra**: Database connection, SeaORM repositories, unit of work
//! - **errors**: Centralized error handling
//! - **telemetry**: Tracing subscriber setup for the bootstrap
//!
//! Every mutating operation runs inside a single database transaction,
//! committed or rolled back as a whole.

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{BlogPost, Comment, Password, PostDraft, User, UserRole};
pub use errors::{AppError, AppResult, OptionExt};
pub use infra::{Database, Persistence, UnitOfWork};
pub use services::{
    AuthService, CommentService, PostService, ServiceContainer, Services, UserService,
};
