//! Store Module
//!
//! In-memory collections of users and posts with monotonic id assignment.

mod collections;
mod seed;


// Re-export public types
pub use collections::{Store, POST_NOT_FOUND, USER_NOT_FOUND};
pub use seed::{sample_posts, sample_users};
