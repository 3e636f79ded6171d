//! The onboarding gate: route classification plus redirect targets.
//!
//! [`OnboardingGate`] wraps the pure [`decide`] function with the configured
//! route matchers and turns a [`GateDecision`] into a redirect location. It
//! holds no mutable state and can be shared freely between requests.

use serde_json::Value;

use crate::error::CoreError;
use crate::onboarding::{decide, GateDecision};
use crate::routes::{RouteMatcher, DEFAULT_ONBOARDING_ROUTES, DEFAULT_PUBLIC_ROUTES};

/// Default sign-in entry point.
pub const DEFAULT_SIGN_IN_URL: &str = "/sign-in";
/// Default first onboarding step.
pub const DEFAULT_ONBOARDING_URL: &str = "/onboarding/platform-selection";
/// Default landing page for onboarded users.
pub const DEFAULT_HOME_URL: &str = "/dashboard";

/// Query parameter carrying the originally requested URL to the sign-in page.
pub const RETURN_URL_PARAM: &str = "redirect_url";

#[derive(Debug, Clone)]
pub struct OnboardingGate {
    public_routes: RouteMatcher,
    onboarding_routes: RouteMatcher,
    sign_in_url: String,
    onboarding_url: String,
    home_url: String,
}

impl OnboardingGate {
    pub fn new(
        public_routes: RouteMatcher,
        onboarding_routes: RouteMatcher,
        sign_in_url: impl Into<String>,
        onboarding_url: impl Into<String>,
        home_url: impl Into<String>,
    ) -> Self {
        Self {
            public_routes,
            onboarding_routes,
            sign_in_url: sign_in_url.into(),
            onboarding_url: onboarding_url.into(),
            home_url: home_url.into(),
        }
    }

    /// Gate with the built-in allow-list, onboarding routes and targets.
    pub fn standard() -> Result<Self, CoreError> {
        Ok(Self::new(
            RouteMatcher::new(DEFAULT_PUBLIC_ROUTES)?,
            RouteMatcher::new(DEFAULT_ONBOARDING_ROUTES)?,
            DEFAULT_SIGN_IN_URL,
            DEFAULT_ONBOARDING_URL,
            DEFAULT_HOME_URL,
        ))
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_routes.matches(path)
    }

    pub fn is_onboarding(&self, path: &str) -> bool {
        self.onboarding_routes.matches(path)
    }

    /// Classify `path` and decide how to route it for the given session.
    pub fn evaluate(
        &self,
        path: &str,
        session_present: bool,
        metadata: Option<&Value>,
    ) -> GateDecision {
        decide(
            self.is_public(path),
            self.is_onboarding(path),
            session_present,
            metadata,
        )
    }

    /// `Location` for a redirecting decision, `None` for [`GateDecision::Allow`].
    ///
    /// Sign-in redirects carry `original_url` (percent-encoded) so the
    /// identity provider can send the user back afterwards.
    pub fn redirect_location(&self, decision: GateDecision, original_url: &str) -> Option<String> {
        match decision {
            GateDecision::Allow => None,
            GateDecision::RedirectToSignIn => {
                let separator = if self.sign_in_url.contains('?') { '&' } else { '?' };
                Some(format!(
                    "{}{separator}{RETURN_URL_PARAM}={}",
                    self.sign_in_url,
                    urlencoding::encode(original_url)
                ))
            }
            GateDecision::RedirectToOnboarding => Some(self.onboarding_url.clone()),
            GateDecision::RedirectToHome => Some(self.home_url.clone()),
        }
    }
}
