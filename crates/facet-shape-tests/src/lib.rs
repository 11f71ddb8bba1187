//! Scenario tests that drive the projection engine the way the
//! application's handlers do, over the shared fixture graph.

pub use facet::prelude::*;
pub use facet_testing_fixtures as fixtures;

#[cfg(test)]
mod test;
