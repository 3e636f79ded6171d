//! `robots.txt` and `sitemap.xml`.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use swipedeck_core::seo;
use swipedeck_db::repositories::CreatorRepo;

use crate::error::AppResult;
use crate::state::AppState;

pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        seo::render_robots(&state.config.public_base_url),
    )
}

/// Static pages plus one entry per creator and platform the creator is on.
pub async fn sitemap_xml(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let base_url = state.config.public_base_url.as_str();
    let mut entries = seo::static_entries(base_url, chrono::Utc::now());

    for creator in CreatorRepo::list_for_sitemap(&state.pool).await? {
        entries.extend(seo::creator_entries(
            base_url,
            &creator.creator_id,
            &creator.platforms(),
            creator.updated_at,
        ));
    }

    tracing::debug!(entries = entries.len(), "Rendered sitemap");

    Ok((
        [(CONTENT_TYPE, "application/xml; charset=utf-8")],
        seo::render_sitemap(&entries),
    ))
}
