//! Repository for the `creators` table.

use sqlx::PgPool;
use swipedeck_core::platform::Platform;

use crate::models::creator::Creator;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "creator_id, name, bio, profile_picture, \
                       x_handle, linkedin_handle, substack_handle, updated_at";

/// Escape `%`, `_` and `\` so user input is matched literally by `ILIKE`.
fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Read access to the creator directory.
pub struct CreatorRepo;

impl CreatorRepo {
    /// All creators ordered by display name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Creator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM creators ORDER BY name");
        sqlx::query_as::<_, Creator>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        creator_id: &str,
    ) -> Result<Option<Creator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM creators WHERE creator_id = $1");
        sqlx::query_as::<_, Creator>(&query)
            .bind(creator_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a creator that has a non-blank handle on `platform`.
    ///
    /// Page slugs carry the lower-cased id, so the id is compared
    /// case-insensitively.
    pub async fn find_with_handle(
        pool: &PgPool,
        creator_id: &str,
        platform: Platform,
    ) -> Result<Option<Creator>, sqlx::Error> {
        // The column name comes from a closed enum, never from input.
        let column = platform.handle_column();
        let query = format!(
            "SELECT {COLUMNS} FROM creators \
             WHERE LOWER(creator_id) = LOWER($1) AND COALESCE(TRIM({column}), '') <> '' \
             ORDER BY creator_id \
             LIMIT 1"
        );
        sqlx::query_as::<_, Creator>(&query)
            .bind(creator_id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search over name and all three handles.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        limit: i64,
    ) -> Result<Vec<Creator>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM creators \
             WHERE name ILIKE $1 \
                OR x_handle ILIKE $1 \
                OR linkedin_handle ILIKE $1 \
                OR substack_handle ILIKE $1 \
             ORDER BY name \
             LIMIT $2"
        );
        sqlx::query_as::<_, Creator>(&query)
            .bind(format!("%{}%", escape_like(term)))
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Creators with at least one non-blank handle, for the sitemap.
    pub async fn list_for_sitemap(pool: &PgPool) -> Result<Vec<Creator>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM creators \
             WHERE COALESCE(TRIM(x_handle), '') <> '' \
                OR COALESCE(TRIM(linkedin_handle), '') <> '' \
                OR COALESCE(TRIM(substack_handle), '') <> '' \
             ORDER BY creator_id"
        );
        sqlx::query_as::<_, Creator>(&query).fetch_all(pool).await
    }
}
