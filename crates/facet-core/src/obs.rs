//! Projection counters.
//!
//! Engine logic never reads these; instrumentation flows one way through
//! [`record`] into thread-local state, snapshotted by endpoint/test
//! plumbing via [`snapshot`].

use serde::Serialize;
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<ProjectionCounters> = RefCell::new(ProjectionCounters::default());
}

///
/// ProjectionCounters
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ProjectionCounters {
    pub records_projected: u64,
    pub fields_emitted: u64,
    pub fields_gated: u64,
    pub memo_hits: u64,
}

///
/// ProjectionEvent
///

#[derive(Clone, Copy, Debug)]
pub(crate) enum ProjectionEvent {
    RecordProjected { fields_emitted: u64 },
    FieldGated,
    MemoHit,
}

pub(crate) fn record(event: ProjectionEvent) {
    STATE.with_borrow_mut(|counters| match event {
        ProjectionEvent::RecordProjected { fields_emitted } => {
            counters.records_projected = counters.records_projected.saturating_add(1);
            counters.fields_emitted = counters.fields_emitted.saturating_add(fields_emitted);
        }
        ProjectionEvent::FieldGated => {
            counters.fields_gated = counters.fields_gated.saturating_add(1);
        }
        ProjectionEvent::MemoHit => {
            counters.memo_hits = counters.memo_hits.saturating_add(1);
        }
    });
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn snapshot() -> ProjectionCounters {
    STATE.with_borrow(|counters| *counters)
}

/// Reset the current thread's counters.
pub fn reset_all() {
    STATE.with_borrow_mut(|counters| *counters = ProjectionCounters::default());
}
