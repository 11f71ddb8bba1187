use crate::{registry::ShapeRegistryError, resolve::ResolveError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level failure of one projection call. Both variants are programmer
/// errors (bad startup configuration or a bad field reference), never
/// transient conditions — there is nothing to retry. Panics raised inside
/// caller-supplied predicates or transforms are deliberately not caught.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] ShapeRegistryError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
