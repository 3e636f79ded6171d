//! Route definitions for featured posts.
//!
//! Mounted at `/api/posts` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// ```text
/// GET    /featured              -> list_home_featured
/// GET    /platform/{platform}   -> list_platform_featured
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/featured", get(posts::list_home_featured))
        .route("/platform/{platform}", get(posts::list_platform_featured))
}
