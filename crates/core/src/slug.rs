//! Creator/platform page slugs.
//!
//! A creator's page on one platform lives at `best-<token>-posts/<creator_id>`,
//! e.g. `best-linkedin-posts/justin-welsh`. The platform comes first because
//! the site groups content by platform as the primary browsing axis.
//!
//! The grammar is closed and case-sensitive: only the lower-case tokens `x`,
//! `linkedin` and `substack` are recognised, since [`encode`] never produces
//! anything else. Callers handing untrusted input to [`decode`] should
//! lower-case it first if they want case-insensitive matching.
//!
//! Everything after `-posts/` is the creator id, including further `/`
//! characters: `best-x-posts/foo/bar` decodes to creator `foo/bar`. Existing
//! links depend on this, so it must not be tightened.

use serde::Serialize;

use crate::platform::Platform;

const SLUG_PREFIX: &str = "best-";
const SLUG_INFIX: &str = "-posts/";

/// A creator's presence on one platform.
///
/// Never persisted on its own; it is a view over a creator row plus one of
/// its handle columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorPlatformRef {
    pub creator_id: String,
    pub platform: Platform,
}

impl CreatorPlatformRef {
    pub fn new(creator_id: impl Into<String>, platform: Platform) -> Self {
        Self {
            creator_id: creator_id.into(),
            platform,
        }
    }

    /// The slug for this page, without a leading `/`.
    pub fn slug(&self) -> String {
        encode(&self.creator_id, self.platform)
    }

    /// Site-relative path for this page (`/best-x-posts/<creator_id>`).
    pub fn page_path(&self) -> String {
        format!("/{}", self.slug())
    }
}

/// Build the slug for a creator's page on `platform`.
///
/// The creator id is lower-cased. An empty `creator_id` produces a slug with
/// an empty tail; callers must not pass one.
pub fn encode(creator_id: &str, platform: Platform) -> String {
    format!(
        "{SLUG_PREFIX}{}{SLUG_INFIX}{}",
        platform.slug_token(),
        creator_id.to_lowercase()
    )
}

/// Parse a slug (no leading `/`) back into a [`CreatorPlatformRef`].
///
/// Returns `None` when the input is not of the form
/// `best-(x|linkedin|substack)-posts/<rest>`. `<rest>` may be empty.
pub fn decode(path: &str) -> Option<CreatorPlatformRef> {
    let rest = path.strip_prefix(SLUG_PREFIX)?;
    let (token, creator_id) = rest.split_once(SLUG_INFIX)?;
    let platform = Platform::from_slug_token(token)?;

    Some(CreatorPlatformRef {
        creator_id: creator_id.to_string(),
        platform,
    })
}
