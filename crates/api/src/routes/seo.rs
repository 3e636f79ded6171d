//! Crawler-facing documents, mounted at the root.

use axum::routing::get;
use axum::Router;

use crate::handlers::seo;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/robots.txt", get(seo::robots_txt))
        .route("/sitemap.xml", get(seo::sitemap_xml))
}
