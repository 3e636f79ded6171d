//! Mounted at `/api/webhooks` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::webhooks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/identity", post(webhooks::receive_identity_event))
}
