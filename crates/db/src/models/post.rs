//! Post entity model.

use serde::Serialize;
use sqlx::FromRow;
use swipedeck_core::platform::Platform;
use swipedeck_core::types::Timestamp;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub post_id: String,
    pub creator_id: String,
    #[sqlx(try_from = "String")]
    pub platform: Platform,
    pub content: String,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub date_published: Timestamp,
    pub post_url: String,
    pub image: Option<String>,
    pub is_featured: bool,
    pub explanation: Option<String>,
    pub category: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub post_type: String,
    pub home_featured: bool,
}

/// A post joined with the author fields its card needs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeaturedPost {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub post: Post,
    pub creator_name: String,
    pub creator_profile_picture: Option<String>,
}
