pub mod creators;
pub mod health;
pub mod onboarding;
pub mod pages;
pub mod posts;
pub mod search;
pub mod seo;
pub mod webhooks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /posts/featured                     home-featured posts
/// /posts/platform/{platform}          featured posts for one platform
///
/// /creators                           list creators
/// /creators/{creator_id}              creator with newest posts (?platform=)
///
/// /search                             creator search (?q=)
///
/// /onboarding/platform                save platform preference (PUT)
/// /onboarding/newsletter              save newsletter choice (PUT)
///
/// /webhooks/identity                  identity-provider events (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/posts", posts::router())
        .nest("/creators", creators::router())
        .nest("/search", search::router())
        .nest("/onboarding", onboarding::router())
        .nest("/webhooks", webhooks::router())
}
