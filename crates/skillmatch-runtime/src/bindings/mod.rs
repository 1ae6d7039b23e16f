//! JSON-returning entry points, grouped by domain.
//!
//! Each binding takes the runtime explicitly so hosts can use either the
//! global singleton (`runtime::get()`) or a runtime they own.

pub mod community;
pub mod friendship;
pub mod health;
pub mod profile;
pub mod search;
