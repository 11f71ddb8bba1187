use crate::value::FieldValue;

///
/// Record
///
/// Read-only boundary between the engine and externally owned entities.
/// The persistence layer loads the entity graph (relations included) before
/// projection starts; the engine only borrows records for the duration of
/// one call and never mutates them.
///

pub trait Record {
    /// Stable type path used as the shape-registry key, e.g. `"app::Team"`.
    fn path(&self) -> &'static str;

    /// Read one named field as a tagged value.
    ///
    /// `None` means the field does not exist on this record type. That is a
    /// programmer error at the call site (a typo in an include list or a
    /// stale base-field registration) and surfaces as
    /// [`ResolveError::UnknownField`](crate::resolve::ResolveError), never as
    /// a silently dropped field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}
