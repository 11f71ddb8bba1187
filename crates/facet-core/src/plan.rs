use crate::{field::FieldSpec, path};
use std::collections::HashMap;

///
/// FieldPlan
///
/// Resolved, ordered field list for one projection of one record, plus the
/// deferred include/exclude references to thread into nested projections,
/// keyed by head segment. Built fresh per call — predicates may depend on
/// caller state, so plans are never cached across calls.
///

pub struct FieldPlan<C> {
    fields: Vec<FieldSpec<C>>,
    include_later: HashMap<String, Vec<FieldSpec<C>>>,
    exclude_later: HashMap<String, Vec<FieldSpec<C>>>,
}

impl<C> FieldPlan<C> {
    /// Compute the plan from a base field list and caller overrides.
    ///
    /// Excludes run first and remove base fields by path; a reference
    /// excluded only for a nested remainder (`a.b`) leaves `a` in place.
    /// Includes then either replace an identity-matched entry in place
    /// (only when the incoming spec is non-passive — a bare re-include
    /// never clobbers a customized base field) or append. Field order is
    /// base order first, then appended includes in caller order.
    pub(crate) fn build(
        base: &[FieldSpec<C>],
        includes: &[FieldSpec<C>],
        excludes: &[FieldSpec<C>],
    ) -> Self {
        let excluded = path::separate(excludes, true);
        let included = path::separate(includes, false);

        let mut fields: Vec<FieldSpec<C>> = base.to_vec();
        for gone in &excluded.now {
            fields.retain(|field| field.path() != gone.path());
        }

        for incoming in included.now {
            if let Some(i) = fields
                .iter()
                .position(|field| field.identity_matches(&incoming))
            {
                if !incoming.is_passive() {
                    fields[i] = incoming;
                }
            } else {
                fields.push(incoming);
            }
        }

        Self {
            fields,
            include_later: included.later,
            exclude_later: excluded.later,
        }
    }

    pub(crate) fn fields(&self) -> &[FieldSpec<C>] {
        &self.fields
    }

    /// Deferred include references for one head field.
    pub(crate) fn nested_includes(&self, head: &str) -> &[FieldSpec<C>] {
        self.include_later.get(head).map_or(&[], Vec::as_slice)
    }

    /// Deferred exclude references for one head field.
    pub(crate) fn nested_excludes(&self, head: &str) -> &[FieldSpec<C>] {
        self.exclude_later.get(head).map_or(&[], Vec::as_slice)
    }
}
