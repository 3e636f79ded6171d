//! Handlers for the onboarding steps.
//!
//! The identity provider's session metadata is the source of truth for
//! routing; these endpoints only mirror each step into the `users` table.
//! They sit under the onboarding routes, so the gate admits only signed-in
//! users who have not finished onboarding.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use swipedeck_core::error::CoreError;
use swipedeck_core::platform::Platform;
use swipedeck_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetPlatformRequest {
    pub platform: String,
}

#[derive(Debug, Deserialize)]
pub struct SetNewsletterRequest {
    pub opt_in: bool,
}

fn user_not_found(user_id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "User",
        id: user_id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// PUT /api/onboarding/platform
// ---------------------------------------------------------------------------

pub async fn set_platform(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SetPlatformRequest>,
) -> AppResult<impl IntoResponse> {
    let platform: Platform = input.platform.parse()?;

    let user = UserRepo::set_platform_preference(&state.pool, &auth.user_id, platform)
        .await?
        .ok_or_else(|| user_not_found(&auth.user_id))?;

    tracing::info!(user_id = %auth.user_id, %platform, "Platform preference saved");

    Ok(Json(DataResponse { data: user }))
}

// ---------------------------------------------------------------------------
// PUT /api/onboarding/newsletter
// ---------------------------------------------------------------------------

/// Record the newsletter choice. This is the last step, so it also marks
/// the user confirmed.
pub async fn set_newsletter(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SetNewsletterRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::set_newsletter_preference(&state.pool, &auth.user_id, input.opt_in)
        .await?
        .ok_or_else(|| user_not_found(&auth.user_id))?;

    tracing::info!(user_id = %auth.user_id, opt_in = input.opt_in, "Newsletter preference saved");

    Ok(Json(DataResponse { data: user }))
}
