//! Core runtime for facet: the record boundary, field descriptors, field
//! plans, and the recursive projection engine exported via the `prelude`.
//!
//! The engine never fetches, validates, or mutates data. It decides which
//! already-loaded fields and relations to expose and how to shape them,
//! per call site, driven by include/exclude reference lists.

// public exports are one module level down
pub mod error;
pub mod field;
pub mod obs;
pub mod path;
pub mod plan;
pub mod project;
pub mod registry;
pub mod resolve;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary; errors and internals stay at
/// their module paths.
///

pub mod prelude {
    pub use crate::{
        field::FieldSpec,
        project::Projector,
        registry::{EntityShape, ShapeRegistry},
        traits::Record,
        value::{FieldValue, Projected, ProjectedMap, Scalar},
    };
}
