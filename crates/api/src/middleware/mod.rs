//! Request middleware and extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the signed-in user from the session token.
//! - [`gate::onboarding_gate`] -- Redirects requests according to the onboarding gate.

pub mod auth;
pub mod gate;
