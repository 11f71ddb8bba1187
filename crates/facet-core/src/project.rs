use crate::{
    Error,
    field::FieldSpec,
    registry::ShapeRegistry,
    resolve::Resolver,
    traits::Record,
    value::{Projected, ProjectedMap},
};

///
/// Projector
///
/// Public projection surface handed to collaborators (HTTP handlers). Pairs
/// the process-wide shape registry with the caller context the predicates
/// and transforms see. Cheap to construct per request.
///

pub struct Projector<'a, C> {
    registry: &'a ShapeRegistry<C>,
    ctx: &'a C,
}

impl<'a, C> Projector<'a, C> {
    #[must_use]
    pub const fn new(registry: &'a ShapeRegistry<C>, ctx: &'a C) -> Self {
        Self { registry, ctx }
    }

    /// Project one record into an ordered mapping.
    ///
    /// `includes` may mix bare references and full specs; `excludes` are
    /// references only (exclusion never carries behavior). Empty references
    /// in either list are skipped.
    pub fn project(
        &self,
        record: &dyn Record,
        includes: &[FieldSpec<C>],
        excludes: &[&str],
    ) -> Result<ProjectedMap, Error> {
        Resolver::new(self.registry, self.ctx).project_record(
            record,
            includes,
            &Self::exclude_specs(excludes),
        )
    }

    /// Project an optional record: `None` in, `Null` out.
    pub fn project_opt(
        &self,
        record: Option<&dyn Record>,
        includes: &[FieldSpec<C>],
        excludes: &[&str],
    ) -> Result<Projected, Error> {
        record.map_or(Ok(Projected::null()), |record| {
            self.project(record, includes, excludes).map(Projected::Map)
        })
    }

    /// Project a sequence of records with one shared set of overrides.
    pub fn project_many(
        &self,
        records: &[&dyn Record],
        includes: &[FieldSpec<C>],
        excludes: &[&str],
    ) -> Result<Vec<ProjectedMap>, Error> {
        let excludes = Self::exclude_specs(excludes);
        let resolver = Resolver::new(self.registry, self.ctx);

        records
            .iter()
            .map(|record| resolver.project_record(*record, includes, &excludes))
            .collect()
    }

    fn exclude_specs(excludes: &[&str]) -> Vec<FieldSpec<C>> {
        excludes.iter().map(|r| FieldSpec::new(*r)).collect()
    }
}
