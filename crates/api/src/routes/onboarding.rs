//! Route definitions for the onboarding steps.
//!
//! Mounted at `/api/onboarding` by `api_routes()`.

use axum::routing::put;
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// ```text
/// PUT    /platform      -> set_platform
/// PUT    /newsletter    -> set_newsletter
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/platform", put(onboarding::set_platform))
        .route("/newsletter", put(onboarding::set_newsletter))
}
