//! Mounted at `/api/search` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::creators;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(creators::search_creators))
}
