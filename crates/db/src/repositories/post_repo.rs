//! Repository for the `posts` table.

use sqlx::PgPool;
use swipedeck_core::platform::Platform;

use crate::models::post::{FeaturedPost, Post};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "post_id, creator_id, platform, content, likes, comments, shares, \
                       date_published, post_url, image, is_featured, explanation, \
                       category, type, home_featured";

/// Post columns qualified with the `p` alias plus the joined creator fields.
const FEATURED_COLUMNS: &str = "p.post_id, p.creator_id, p.platform, p.content, p.likes, \
                                p.comments, p.shares, p.date_published, p.post_url, p.image, \
                                p.is_featured, p.explanation, p.category, p.type, \
                                p.home_featured, c.name AS creator_name, \
                                c.profile_picture AS creator_profile_picture";

/// Read access to curated posts.
pub struct PostRepo;

impl PostRepo {
    /// Posts flagged for the home page, newest first.
    pub async fn list_home_featured(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<FeaturedPost>, sqlx::Error> {
        let query = format!(
            "SELECT {FEATURED_COLUMNS} FROM posts p \
             JOIN creators c ON c.creator_id = p.creator_id \
             WHERE p.home_featured \
             ORDER BY p.date_published DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, FeaturedPost>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Featured posts on one platform across all creators, newest first.
    pub async fn list_featured_by_platform(
        pool: &PgPool,
        platform: Platform,
        limit: i64,
    ) -> Result<Vec<FeaturedPost>, sqlx::Error> {
        let query = format!(
            "SELECT {FEATURED_COLUMNS} FROM posts p \
             JOIN creators c ON c.creator_id = p.creator_id \
             WHERE p.is_featured AND p.platform = $1 \
             ORDER BY p.date_published DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, FeaturedPost>(&query)
            .bind(platform.as_str())
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// A creator's featured posts on one platform, newest first.
    pub async fn list_featured_for_creator(
        pool: &PgPool,
        creator_id: &str,
        platform: Platform,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts \
             WHERE creator_id = $1 AND platform = $2 AND is_featured \
             ORDER BY date_published DESC"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(creator_id)
            .bind(platform.as_str())
            .fetch_all(pool)
            .await
    }

    /// A creator's most recent posts, optionally restricted to one platform.
    pub async fn list_for_creator(
        pool: &PgPool,
        creator_id: &str,
        platform: Option<Platform>,
        limit: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts \
             WHERE creator_id = $1 AND ($2::TEXT IS NULL OR platform = $2) \
             ORDER BY date_published DESC \
             LIMIT $3"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(creator_id)
            .bind(platform.map(Platform::as_str))
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
