//! Identity-provider session handling.
//!
//! - [`session`] -- Session token extraction and JWT validation.

pub mod session;
