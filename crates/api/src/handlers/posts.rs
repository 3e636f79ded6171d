//! Handlers for featured post listings.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use swipedeck_core::platform::Platform;
use swipedeck_db::repositories::PostRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

const HOME_FEATURED_LIMIT: i64 = 20;
const PLATFORM_FEATURED_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// GET /api/posts/featured
// ---------------------------------------------------------------------------

/// Posts picked for the home page, newest first.
pub async fn list_home_featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = PostRepo::list_home_featured(&state.pool, HOME_FEATURED_LIMIT).await?;
    Ok(Json(DataResponse { data: posts }))
}

// ---------------------------------------------------------------------------
// GET /api/posts/platform/{platform}
// ---------------------------------------------------------------------------

/// Featured posts for one platform. Accepts the tag (`LinkedIn`) or the
/// slug token (`linkedin`).
pub async fn list_platform_featured(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> AppResult<impl IntoResponse> {
    let platform: Platform = platform.parse()?;

    let posts =
        PostRepo::list_featured_by_platform(&state.pool, platform, PLATFORM_FEATURED_LIMIT).await?;

    tracing::debug!(%platform, count = posts.len(), "Listed featured posts");

    Ok(Json(DataResponse { data: posts }))
}
