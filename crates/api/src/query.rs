//! Shared query parameter types for API handlers.

use serde::Deserialize;
use validator::Validate;

/// Longest accepted search term, in characters.
pub const MAX_SEARCH_LEN: u64 = 100;

/// Query parameters for `GET /api/search` (`?q=`).
#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(max = 100))]
    pub q: Option<String>,
}

impl SearchParams {
    /// The trimmed search term, `None` when missing or blank.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// Optional `?platform=` filter. Kept as a raw string so an unknown value can
/// be reported as a 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct PlatformFilterParams {
    pub platform: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_term_is_none() {
        let params = SearchParams {
            q: Some("   ".to_string()),
        };
        assert_eq!(params.term(), None);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn long_term_fails_validation() {
        let params = SearchParams {
            q: Some("a".repeat(MAX_SEARCH_LEN as usize + 1)),
        };
        assert!(params.validate().is_err());

        let params = SearchParams {
            q: Some("a".repeat(MAX_SEARCH_LEN as usize)),
        };
        assert!(params.validate().is_ok());
    }
}
