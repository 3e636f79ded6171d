//! Path pattern matching for the public allow-list and onboarding routes.
//!
//! Patterns use regex syntax and are anchored at both ends, so `/` matches
//! only the root while `/sign-in(.*)` matches `/sign-in` and everything
//! beneath it.

use regex::RegexSet;

use crate::error::CoreError;

/// Routes reachable without a session.
pub const DEFAULT_PUBLIC_ROUTES: &[&str] = &[
    "/",
    "/sign-in(.*)",
    "/sign-up(.*)",
    "/api/webhooks/identity(.*)",
    "/terms(.*)",
    "/best-x-posts(.*)",
    "/best-linkedin-posts(.*)",
    "/best-substack-posts(.*)",
    "/health",
    r"/sitemap\.xml",
    r"/robots\.txt",
    "/api/search(.*)",
    "/api/creators(.*)",
    "/api/posts(.*)",
];

/// Routes that make up the onboarding flow.
pub const DEFAULT_ONBOARDING_ROUTES: &[&str] = &["/onboarding(.*)", "/api/onboarding(.*)"];

/// A compiled set of anchored path patterns.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    set: RegexSet,
}

impl RouteMatcher {
    /// Compile `patterns`. Fails on the first invalid pattern.
    pub fn new<I, S>(patterns: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let anchored: Vec<String> = patterns
            .into_iter()
            .map(|p| format!("^(?:{})$", p.as_ref()))
            .collect();

        let set = RegexSet::new(&anchored)
            .map_err(|e| CoreError::Validation(format!("Invalid route pattern: {e}")))?;

        Ok(Self { set })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
