//! Domain logic for the swipe-file directory.
//!
//! Everything in this crate is synchronous and free of I/O so it can be
//! shared by the API layer, the repositories and tests alike.

pub mod error;
pub mod gate;
pub mod onboarding;
pub mod platform;
pub mod routes;
pub mod seo;
pub mod slug;
pub mod types;
pub mod webhook;
