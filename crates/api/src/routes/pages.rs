//! Page data routes, mounted at the root.
//!
//! Creator pages (`/best-{platform}-posts/{creator_id}`) are served by the
//! router fallback, see [`crate::handlers::pages::creator_platform_page`].

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(pages::dashboard))
}
