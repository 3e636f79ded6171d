//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod creator_repo;
pub mod post_repo;
pub mod user_repo;

pub use creator_repo::CreatorRepo;
pub use post_repo::PostRepo;
pub use user_repo::UserRepo;
