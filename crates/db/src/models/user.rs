//! Mirrored identity-provider user model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use swipedeck_core::platform::Platform;
use swipedeck_core::types::Timestamp;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub platform_preference: Option<String>,
    pub opt_in_newsletter: bool,
    pub join_date: Timestamp,
    pub is_confirmed: bool,
    pub convertkit_id: Option<String>,
}

impl User {
    /// Stored platform preference, `None` if unset or unrecognised.
    pub fn platform(&self) -> Option<Platform> {
        self.platform_preference.as_deref().and_then(Platform::from_tag)
    }
}

/// DTO for mirroring a newly created identity-provider account.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub email: String,
}
