use crate::{
    Error,
    field::{Condition, FieldSpec},
    obs::{self, ProjectionEvent},
    plan::FieldPlan,
    registry::{EntityShape, ShapeRegistry},
    traits::Record,
    value::{self, FieldValue, Projected, ProjectedMap},
};
use std::{collections::HashMap, sync::Arc};
use thiserror::Error as ThisError;

///
/// ResolveError
///

#[derive(Debug, ThisError)]
pub enum ResolveError {
    #[error("unknown field '{field}' on entity '{entity}'")]
    UnknownField {
        entity: &'static str,
        field: String,
    },
}

///
/// ConditionMemo
///
/// Per-record cache of predicate results, keyed by predicate identity (the
/// shared `Arc` allocation). Lives for one record's field loop so that
/// several specs gated on the same predicate evaluate it once; discarded
/// afterwards because predicates may inspect caller state.
///

pub(crate) struct ConditionMemo {
    results: HashMap<usize, bool>,
}

impl ConditionMemo {
    pub(crate) fn new() -> Self {
        Self {
            results: HashMap::new(),
        }
    }

    pub(crate) fn eval<C>(
        &mut self,
        condition: &Condition<C>,
        record: &dyn Record,
        ctx: &C,
    ) -> bool {
        let key = Arc::as_ptr(condition).cast::<()>() as usize;
        if let Some(&result) = self.results.get(&key) {
            obs::record(ProjectionEvent::MemoHit);
            return result;
        }

        let result = condition(record, ctx);
        self.results.insert(key, result);
        result
    }
}

///
/// Resolver
///
/// Recursive projection walk over one record and its relation subtree.
/// Synchronous and non-blocking: all data is already loaded, so the whole
/// subtree completes within one call stack. Traversal is field-directed —
/// a relation is only entered when named by a base field or include, which
/// keeps back-references in the entity graph from causing cycles.
///

pub(crate) struct Resolver<'a, C> {
    registry: &'a ShapeRegistry<C>,
    ctx: &'a C,
}

impl<'a, C> Resolver<'a, C> {
    pub(crate) const fn new(registry: &'a ShapeRegistry<C>, ctx: &'a C) -> Self {
        Self { registry, ctx }
    }

    /// Project one record with the given caller overrides.
    pub(crate) fn project_record(
        &self,
        record: &dyn Record,
        includes: &[FieldSpec<C>],
        excludes: &[FieldSpec<C>],
    ) -> Result<ProjectedMap, Error> {
        let shape = self.registry.try_get_shape(record.path())?;
        let plan = FieldPlan::build(shape.base_fields(), includes, excludes);
        let mut memo = ConditionMemo::new();

        let mut data = ProjectedMap::new();
        for spec in plan.fields() {
            if let Some((key, projected)) = self.resolve_field(record, shape, &plan, spec, &mut memo)? {
                data.insert(key, projected);
            }
        }

        obs::record(ProjectionEvent::RecordProjected {
            fields_emitted: data.len() as u64,
        });
        Ok(data)
    }

    /// Resolve one field of `record`, or `None` when its condition gates it
    /// out entirely (no key emitted).
    fn resolve_field(
        &self,
        record: &dyn Record,
        shape: &EntityShape<C>,
        plan: &FieldPlan<C>,
        spec: &FieldSpec<C>,
        memo: &mut ConditionMemo,
    ) -> Result<Option<(String, Projected)>, Error> {
        if let Some(condition) = spec.condition() {
            if !memo.eval(condition, record, self.ctx) {
                obs::record(ProjectionEvent::FieldGated);
                return Ok(None);
            }
        }

        let raw = record
            .field(spec.path())
            .ok_or_else(|| ResolveError::UnknownField {
                entity: record.path(),
                field: spec.path().to_string(),
            })?;

        let includes = plan.nested_includes(spec.path());
        let excludes = plan.nested_excludes(spec.path());

        let mut projected = match raw {
            FieldValue::Scalar(scalar) => Projected::Scalar(scalar),
            FieldValue::Timestamp(ts) => Projected::from(value::format_timestamp(&ts)),
            FieldValue::One(None) => Projected::null(),
            FieldValue::One(Some(related)) => {
                Projected::Map(self.project_record(related, includes, excludes)?)
            }
            FieldValue::Many(items) => {
                let mut members = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(filter) = spec.item_filter() {
                        if !filter(item, self.ctx) {
                            continue;
                        }
                    }
                    members.push(Projected::Map(self.project_record(item, includes, excludes)?));
                }
                Projected::List(members)
            }
        };

        // Post-serial filtering sees projected members only; raw rejects
        // above never reach it.
        if let Some(post_filter) = spec.post_item_filter() {
            projected = match projected {
                Projected::List(members) => Projected::List(
                    members
                        .into_iter()
                        .filter(|member| post_filter(member, self.ctx))
                        .collect(),
                ),
                other => other,
            };
        }

        if let Some(transform) = spec.post_transform() {
            projected = transform(projected, self.ctx);
        }

        let key = spec.key().map_or_else(
            || shape.rename(spec.path()).unwrap_or(spec.path()).to_string(),
            str::to_string,
        );
        Ok(Some((key, projected)))
    }
}
