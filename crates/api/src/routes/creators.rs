//! Route definitions for the creator directory.
//!
//! Mounted at `/api/creators` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::creators;
use crate::state::AppState;

/// ```text
/// GET    /                -> list_creators
/// GET    /{creator_id}    -> get_creator (?platform=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(creators::list_creators))
        .route("/{creator_id}", get(creators::get_creator))
}
