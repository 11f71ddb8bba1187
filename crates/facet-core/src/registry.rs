use crate::{Error, field::FieldSpec, path::SEPARATOR};
use std::collections::HashMap;
use thiserror::Error as ThisError;

///
/// ShapeRegistryError
///

#[derive(Debug, ThisError)]
pub enum ShapeRegistryError {
    #[error("no shape registered for entity '{0}'")]
    ShapeNotFound(String),

    #[error("shape for entity '{0}' already registered")]
    ShapeAlreadyRegistered(String),

    #[error("shape for entity '{0}' declares no base fields")]
    EmptyShape(String),

    #[error("base field '{field}' of entity '{entity}' contains the path separator")]
    SeparatorInBaseField { entity: String, field: String },
}

///
/// EntityShape
///
/// Per-type projection configuration: the ordered base field list projected
/// when a caller supplies no overrides, plus an optional rename table from
/// source path to output key.
///

#[derive(Debug)]
pub struct EntityShape<C> {
    base: Vec<FieldSpec<C>>,
    renames: HashMap<String, String>,
}

impl<C> EntityShape<C> {
    #[must_use]
    pub fn new<I, F>(base_fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldSpec<C>>,
    {
        Self {
            base: base_fields.into_iter().map(Into::into).collect(),
            renames: HashMap::new(),
        }
    }

    /// Expose `source` under `key` whenever no per-spec override applies.
    #[must_use]
    pub fn with_rename(mut self, source: impl Into<String>, key: impl Into<String>) -> Self {
        self.renames.insert(source.into(), key.into());
        self
    }

    pub(crate) fn base_fields(&self) -> &[FieldSpec<C>] {
        &self.base
    }

    pub(crate) fn rename(&self, source: &str) -> Option<&str> {
        self.renames.get(source).map(String::as_str)
    }
}

///
/// ShapeRegistry
///
/// Registry of entity shapes keyed by entity path. Built once at process
/// start, read-only afterwards; concurrent readers need no synchronization.
///

#[derive(Default)]
pub struct ShapeRegistry<C> {
    shapes: HashMap<&'static str, EntityShape<C>>,
}

impl<C> ShapeRegistry<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
        }
    }

    /// Register the shape for one entity path.
    ///
    /// Base field names are single segments by construction; a separator in
    /// one is a startup-time configuration error, as is an empty base list
    /// or registering the same path twice.
    pub fn register(
        &mut self,
        entity: &'static str,
        shape: EntityShape<C>,
    ) -> Result<(), ShapeRegistryError> {
        if self.shapes.contains_key(entity) {
            return Err(ShapeRegistryError::ShapeAlreadyRegistered(entity.to_string()));
        }
        if shape.base.is_empty() {
            return Err(ShapeRegistryError::EmptyShape(entity.to_string()));
        }
        if let Some(bad) = shape
            .base
            .iter()
            .find(|field| field.path().contains(SEPARATOR))
        {
            return Err(ShapeRegistryError::SeparatorInBaseField {
                entity: entity.to_string(),
                field: bad.path().to_string(),
            });
        }

        self.shapes.insert(entity, shape);
        Ok(())
    }

    /// Look up a shape by entity path.
    pub(crate) fn try_get_shape(&self, entity: &str) -> Result<&EntityShape<C>, Error> {
        self.shapes
            .get(entity)
            .ok_or_else(|| ShapeRegistryError::ShapeNotFound(entity.to_string()).into())
    }

    /// Iterate registered entity paths.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.shapes.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTITY_PATH: &str = "registry_tests::Team";

    #[test]
    fn registered_shape_resolves_with_its_base_fields() {
        let mut registry: ShapeRegistry<()> = ShapeRegistry::new();
        registry
            .register(ENTITY_PATH, EntityShape::new(["id", "name", "points"]))
            .expect("shape registration should succeed");

        let shape = registry
            .try_get_shape(ENTITY_PATH)
            .expect("registered path should resolve");
        let fields: Vec<_> = shape.base_fields().iter().map(FieldSpec::path).collect();
        assert_eq!(fields, ["id", "name", "points"]);
    }

    #[test]
    fn missing_shape_is_a_configuration_error() {
        let registry: ShapeRegistry<()> = ShapeRegistry::new();
        let err = registry
            .try_get_shape("registry_tests::Missing")
            .expect_err("unregistered path should fail lookup");
        assert!(err.to_string().contains("registry_tests::Missing"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry: ShapeRegistry<()> = ShapeRegistry::new();
        registry
            .register(ENTITY_PATH, EntityShape::new(["id"]))
            .expect("initial registration should succeed");

        let err = registry
            .register(ENTITY_PATH, EntityShape::new(["id"]))
            .expect_err("duplicate registration should fail");
        assert!(matches!(err, ShapeRegistryError::ShapeAlreadyRegistered(_)));
    }

    #[test]
    fn empty_base_list_is_rejected() {
        let mut registry: ShapeRegistry<()> = ShapeRegistry::new();
        let empty: Vec<&str> = Vec::new();
        let err = registry
            .register(ENTITY_PATH, EntityShape::new(empty))
            .expect_err("empty shape should fail registration");
        assert!(matches!(err, ShapeRegistryError::EmptyShape(_)));
    }

    #[test]
    fn separator_in_base_field_is_rejected() {
        let mut registry: ShapeRegistry<()> = ShapeRegistry::new();
        let err = registry
            .register(ENTITY_PATH, EntityShape::new(["id", "players.user"]))
            .expect_err("dotted base field should fail registration");
        assert!(matches!(
            err,
            ShapeRegistryError::SeparatorInBaseField { ref field, .. } if field == "players.user"
        ));
    }

    #[test]
    fn rename_table_maps_source_to_output_key() {
        let shape: EntityShape<()> = EntityShape::new(["text"]).with_rename("text", "content");
        assert_eq!(shape.rename("text"), Some("content"));
        assert_eq!(shape.rename("posted_at"), None);
    }
}
