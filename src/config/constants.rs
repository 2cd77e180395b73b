//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role permitted to create, edit and delete posts
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Posts
// =============================================================================

/// Human-readable creation date stamped onto a post, e.g. "August 27, 2026".
/// Stored as-is and never rewritten.
pub const POST_DATE_FORMAT: &str = "%B %d, %Y";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inkpress.db?mode=rwc";
