//! # skillmatch-runtime
//!
//! [`MatchRuntime`] owns every engine and the current vector-store
//! snapshot. [`bindings`] expose each operation as JSON in the shapes
//! API callers expect.

pub mod bindings;
pub mod conversions;
pub mod runtime;

pub use runtime::{MatchRuntime, RuntimeOptions};
