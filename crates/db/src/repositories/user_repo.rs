//! Repository for the `users` table.
//!
//! These rows mirror the identity provider's accounts. Writes here are best
//! effort and never influence routing, which reads session metadata instead.

use sqlx::PgPool;
use swipedeck_core::platform::Platform;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, platform_preference, opt_in_newsletter, \
                       join_date, is_confirmed, convertkit_id";

/// Provides the mirror writes for user accounts.
pub struct UserRepo;

impl UserRepo {
    /// Insert a freshly signed-up user with empty onboarding state.
    ///
    /// Redelivered signup events return the existing row unchanged (no-op
    /// `DO UPDATE` so `RETURNING` always produces a row).
    pub async fn create_from_signup(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, email, is_confirmed, opt_in_newsletter, platform_preference) \
             VALUES ($1, $2, FALSE, FALSE, NULL) \
             ON CONFLICT (id) DO UPDATE SET id = users.id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.id)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record the platform chosen in the first onboarding step.
    ///
    /// Returns `None` if the user has not been mirrored yet.
    pub async fn set_platform_preference(
        pool: &PgPool,
        id: &str,
        platform: Platform,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET platform_preference = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(platform.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Record the newsletter choice from the final onboarding step, which
    /// also confirms the account.
    ///
    /// Returns `None` if the user has not been mirrored yet.
    pub async fn set_newsletter_preference(
        pool: &PgPool,
        id: &str,
        opt_in: bool,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET opt_in_newsletter = $2, is_confirmed = TRUE \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(opt_in)
            .fetch_optional(pool)
            .await
    }
}
