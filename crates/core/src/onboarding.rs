//! Onboarding state and the routing decision derived from it.
//!
//! Onboarding state lives in the identity provider's session metadata, not in
//! the database. It is re-read on every request, so nothing here holds state:
//! the same inputs always produce the same [`GateDecision`].
//!
//! A user is fully onboarded when all of the following hold:
//!
//! - `is_confirmed` is `true`
//! - `platform_preference` is one of the canonical platform tags
//! - `opt_in_newsletter` is present as a boolean (either value)
//!
//! Anything missing, of the wrong JSON type, or unrecognised counts as not
//! onboarded.

use serde::Serialize;
use serde_json::Value;

use crate::platform::Platform;

/// Metadata key for the confirmation flag.
pub const METADATA_IS_CONFIRMED: &str = "is_confirmed";
/// Metadata key for the preferred platform.
pub const METADATA_PLATFORM_PREFERENCE: &str = "platform_preference";
/// Metadata key for the newsletter opt-in.
pub const METADATA_OPT_IN_NEWSLETTER: &str = "opt_in_newsletter";

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The subset of a user's profile that decides routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserOnboardingProfile {
    pub is_confirmed: bool,
    pub platform_preference: Option<Platform>,
    pub opt_in_newsletter: Option<bool>,
}

impl UserOnboardingProfile {
    /// Read the profile out of a session metadata bag.
    ///
    /// Never fails. Fields that are absent, of the wrong type, or carry an
    /// unknown platform tag are left at their empty value.
    pub fn from_metadata(metadata: &Value) -> Self {
        let is_confirmed = metadata
            .get(METADATA_IS_CONFIRMED)
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let platform_preference = metadata
            .get(METADATA_PLATFORM_PREFERENCE)
            .and_then(Value::as_str)
            .and_then(Platform::from_tag);

        let opt_in_newsletter = metadata
            .get(METADATA_OPT_IN_NEWSLETTER)
            .and_then(Value::as_bool);

        Self {
            is_confirmed,
            platform_preference,
            opt_in_newsletter,
        }
    }

    pub fn is_fully_onboarded(&self) -> bool {
        self.is_confirmed && self.platform_preference.is_some() && self.opt_in_newsletter.is_some()
    }
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// Where a visitor stands, recomputed per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingState {
    Anonymous,
    Incomplete,
    Complete,
}

impl OnboardingState {
    pub fn classify(session_present: bool, metadata: Option<&Value>) -> Self {
        if !session_present {
            return OnboardingState::Anonymous;
        }
        let complete = metadata
            .map(UserOnboardingProfile::from_metadata)
            .is_some_and(|profile| profile.is_fully_onboarded());
        if complete {
            OnboardingState::Complete
        } else {
            OnboardingState::Incomplete
        }
    }
}

/// Outcome of the onboarding gate for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDecision {
    Allow,
    RedirectToSignIn,
    RedirectToOnboarding,
    RedirectToHome,
}

/// Decide how to route a request.
///
/// Public routes are always allowed regardless of session. Onboarding routes
/// are open to signed-in users who have not finished onboarding and bounce
/// everyone who has back to the home route.
pub fn decide(
    is_public_route: bool,
    is_onboarding_route: bool,
    session_present: bool,
    metadata: Option<&Value>,
) -> GateDecision {
    if is_public_route {
        return GateDecision::Allow;
    }

    match (
        OnboardingState::classify(session_present, metadata),
        is_onboarding_route,
    ) {
        (OnboardingState::Anonymous, _) => GateDecision::RedirectToSignIn,
        (OnboardingState::Incomplete, true) => GateDecision::Allow,
        (OnboardingState::Incomplete, false) => GateDecision::RedirectToOnboarding,
        (OnboardingState::Complete, true) => GateDecision::RedirectToHome,
        (OnboardingState::Complete, false) => GateDecision::Allow,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
