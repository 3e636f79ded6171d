//! The closed set of social platforms the directory tracks.
//!
//! A [`Platform`] has three spellings:
//!
//! | Variant    | Canonical tag | Slug token | Handle column     |
//! |------------|---------------|------------|-------------------|
//! | `X`        | `X`           | `x`        | `x_handle`        |
//! | `LinkedIn` | `LinkedIn`    | `linkedin` | `linkedin_handle` |
//! | `Substack` | `Substack`    | `substack` | `substack_handle` |
//!
//! The canonical tag is what gets stored in the database and in session
//! metadata. The slug token only ever appears inside page URLs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    X,
    LinkedIn,
    Substack,
}

impl Platform {
    /// Every platform, in the order they are presented to visitors.
    pub const ALL: [Platform; 3] = [Platform::X, Platform::LinkedIn, Platform::Substack];

    /// Canonical tag (`"X"`, `"LinkedIn"`, `"Substack"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::X => "X",
            Platform::LinkedIn => "LinkedIn",
            Platform::Substack => "Substack",
        }
    }

    /// Lower-case token used inside `best-<token>-posts/` page slugs.
    pub fn slug_token(self) -> &'static str {
        match self {
            Platform::X => "x",
            Platform::LinkedIn => "linkedin",
            Platform::Substack => "substack",
        }
    }

    /// Name of the `creators` column holding the creator's handle on this
    /// platform.
    pub fn handle_column(self) -> &'static str {
        match self {
            Platform::X => "x_handle",
            Platform::LinkedIn => "linkedin_handle",
            Platform::Substack => "substack_handle",
        }
    }

    /// Exact, case-sensitive match on the canonical tag.
    ///
    /// Used where the value was written by this system (session metadata,
    /// database rows) and anything else means the data is malformed.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == tag)
    }

    /// Exact, case-sensitive match on the slug token.
    pub fn from_slug_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug_token() == token)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient parse for user-supplied values such as query parameters.
///
/// Accepts either the canonical tag or the slug token, ignoring case.
impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| {
                p.as_str().eq_ignore_ascii_case(needle) || p.slug_token().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid platform '{s}'. Must be one of: X, LinkedIn, Substack"
                ))
            })
    }
}

/// Strict conversion used when decoding database rows.
impl TryFrom<String> for Platform {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_tag(&value).ok_or_else(|| {
            CoreError::Internal(format!("Unknown platform tag '{value}' in stored row"))
        })
    }
}
