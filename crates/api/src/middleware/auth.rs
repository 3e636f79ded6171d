//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use serde_json::Value;
use swipedeck_core::error::CoreError;
use swipedeck_core::onboarding::UserOnboardingProfile;

use crate::auth::session::{extract_token, validate_session_token, SessionClaims, SessionConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Signed-in user extracted from the session token (bearer header or
/// `__session` cookie).
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The identity provider's user id (from `claims.sub`).
    pub user_id: String,
    /// Public metadata carried by the session.
    pub metadata: Option<Value>,
}

impl AuthUser {
    /// Onboarding fields read from the session metadata.
    pub fn profile(&self) -> UserOnboardingProfile {
        self.metadata
            .as_ref()
            .map(UserOnboardingProfile::from_metadata)
            .unwrap_or_default()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session token".into()))
        })?;

        let claims = validate_session_token(token, &state.config.session).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            metadata: claims.metadata,
        })
    }
}

/// Resolve the session on a request, treating a missing, malformed or
/// expired token as no session.
pub fn session_from_headers(headers: &HeaderMap, config: &SessionConfig) -> Option<SessionClaims> {
    let token = extract_token(headers)?;
    match validate_session_token(token, config) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid session token");
            None
        }
    }
}
