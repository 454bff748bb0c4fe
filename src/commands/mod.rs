//! Remote Commands
//!
//! Bindings to the external REST endpoint, organized by resource.

mod users;

pub use users::*;
