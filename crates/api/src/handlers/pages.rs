//! Page data for the public creator pages and the signed-in dashboard.
//!
//! Creator pages are not registered as routes. The router falls through to
//! [`creator_platform_page`], which decodes the path with the slug codec and
//! answers 404 for anything that is not a `best-{platform}-posts/{creator}`
//! page.

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use swipedeck_core::error::CoreError;
use swipedeck_core::onboarding::UserOnboardingProfile;
use swipedeck_core::platform::Platform;
use swipedeck_core::slug;
use swipedeck_db::models::creator::Creator;
use swipedeck_db::models::post::Post;
use swipedeck_db::repositories::{CreatorRepo, PostRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum posts shown on a creator page.
const PAGE_POSTS_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
pub struct CreatorPage {
    pub creator: Creator,
    pub platform: Platform,
    pub handle: String,
    pub page_url: String,
    /// Featured posts on this platform before the page limit is applied.
    pub total_posts: usize,
    pub posts: Vec<Post>,
}

impl CreatorPage {
    /// Keep the newest [`PAGE_POSTS_LIMIT`] posts and remember how many there were.
    fn new(
        creator: Creator,
        platform: Platform,
        handle: String,
        page_url: String,
        mut posts: Vec<Post>,
    ) -> Self {
        let total_posts = posts.len();
        posts.truncate(PAGE_POSTS_LIMIT);
        Self {
            creator,
            platform,
            handle,
            page_url,
            total_posts,
            posts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub user_id: String,
    #[serde(flatten)]
    pub profile: UserOnboardingProfile,
}

fn page_not_found(uri: &Uri) -> CoreError {
    CoreError::NotFound {
        entity: "Page",
        id: uri.path().to_string(),
    }
}

// ---------------------------------------------------------------------------
// GET /best-{platform}-posts/{creator_id} (router fallback)
// ---------------------------------------------------------------------------

pub async fn creator_platform_page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> AppResult<impl IntoResponse> {
    if method != Method::GET {
        return Err(page_not_found(&uri).into());
    }

    let page = uri
        .path()
        .strip_prefix('/')
        .and_then(slug::decode)
        .filter(|p| !p.creator_id.is_empty())
        .ok_or_else(|| page_not_found(&uri))?;

    let creator = CreatorRepo::find_with_handle(&state.pool, &page.creator_id, page.platform)
        .await?
        .ok_or_else(|| page_not_found(&uri))?;

    // The slug id is lower-cased; posts reference the stored id.
    let posts =
        PostRepo::list_featured_for_creator(&state.pool, &creator.creator_id, page.platform)
            .await?;
    if posts.is_empty() {
        tracing::debug!(creator_id = %creator.creator_id, platform = %page.platform, "Creator page has no featured posts");
        return Err(page_not_found(&uri).into());
    }

    let handle = creator
        .handle(page.platform)
        .map(str::to_string)
        .ok_or_else(|| page_not_found(&uri))?;

    let page_url = format!("{}{}", state.config.public_base_url, page.page_path());

    Ok(Json(DataResponse {
        data: CreatorPage::new(creator, page.platform, handle, page_url, posts),
    }))
}

// ---------------------------------------------------------------------------
// GET /dashboard
// ---------------------------------------------------------------------------

/// The signed-in user's onboarding profile as carried by the session.
pub async fn dashboard(auth: AuthUser) -> AppResult<impl IntoResponse> {
    let profile = auth.profile();
    Ok(Json(DataResponse {
        data: Dashboard {
            user_id: auth.user_id,
            profile,
        },
    }))
}
