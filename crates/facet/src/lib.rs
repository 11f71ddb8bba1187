//! ## Crate layout
//! - `core`: the projection engine — records, field specs, plans, the
//!   resolver, and the shape registry.
//!
//! The `prelude` module mirrors the surface handlers use when shaping
//! responses.

pub use facet_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use facet_core::{
    Error, error, field, obs, path, plan, project, registry, resolve, traits, value,
};

///
/// Handler Prelude
///

pub mod prelude {
    pub use facet_core::prelude::*;
}
