//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row, plus any input DTOs its repository accepts.

pub mod creator;
pub mod post;
pub mod user;
