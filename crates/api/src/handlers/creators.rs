//! Handlers for the creator directory and creator search.
//!
//! These endpoints are public. Each creator is returned with the page URLs
//! for every platform it has a handle on, built through the slug codec.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use swipedeck_core::error::CoreError;
use swipedeck_core::platform::Platform;
use swipedeck_db::models::creator::Creator;
use swipedeck_db::models::post::Post;
use swipedeck_db::repositories::{CreatorRepo, PostRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::{PlatformFilterParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum creators returned by a search.
const SEARCH_LIMIT: i64 = 5;

/// Maximum posts returned with a creator.
const CREATOR_POSTS_LIMIT: i64 = 10;

/// A creator plus the directory pages that link to it.
#[derive(Debug, Serialize)]
pub struct CreatorSummary {
    #[serde(flatten)]
    pub creator: Creator,
    pub page_urls: Vec<String>,
}

impl From<Creator> for CreatorSummary {
    fn from(creator: Creator) -> Self {
        let page_urls = creator.pages().iter().map(|p| p.page_path()).collect();
        Self { creator, page_urls }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatorDetail {
    pub creator: CreatorSummary,
    pub posts: Vec<Post>,
}

// ---------------------------------------------------------------------------
// GET /api/creators
// ---------------------------------------------------------------------------

pub async fn list_creators(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let creators: Vec<CreatorSummary> = CreatorRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(CreatorSummary::from)
        .collect();

    Ok(Json(DataResponse { data: creators }))
}

// ---------------------------------------------------------------------------
// GET /api/creators/{creator_id}
// ---------------------------------------------------------------------------

/// A creator with its newest posts, optionally limited to one platform.
pub async fn get_creator(
    State(state): State<AppState>,
    Path(creator_id): Path<String>,
    Query(params): Query<PlatformFilterParams>,
) -> AppResult<impl IntoResponse> {
    // Reject an unknown platform before touching the database.
    let platform = params
        .platform
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(str::parse::<Platform>)
        .transpose()?;

    let creator = CreatorRepo::find_by_id(&state.pool, &creator_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Creator",
            id: creator_id.clone(),
        })?;

    let posts =
        PostRepo::list_for_creator(&state.pool, &creator_id, platform, CREATOR_POSTS_LIMIT).await?;

    Ok(Json(DataResponse {
        data: CreatorDetail {
            creator: creator.into(),
            posts,
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /api/search
// ---------------------------------------------------------------------------

/// Case-insensitive substring search over creator names and handles.
///
/// A missing or blank `q` yields an empty list without querying.
pub async fn search_creators(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    params
        .validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid search query: {e}")))?;

    let creators: Vec<CreatorSummary> = match params.term() {
        Some(term) => CreatorRepo::search(&state.pool, term, SEARCH_LIMIT)
            .await?
            .into_iter()
            .map(CreatorSummary::from)
            .collect(),
        None => Vec::new(),
    };

    Ok(Json(DataResponse { data: creators }))
}
