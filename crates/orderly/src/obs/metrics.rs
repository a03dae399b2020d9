use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for sort operations on the current thread.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
    pub(crate) records: BTreeMap<String, RecordCounters>,
}

///
/// EventOps
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Resolution
    pub resolve_hits: u64,
    pub resolve_misses: u64,
    pub resolve_failures: u64,

    // Ordering
    pub order_calls: u64,
    pub rows_ordered: u64,
    pub keys_skipped: u64,
    pub degraded: u64,

    // Paging
    pub page_calls: u64,
    pub rows_paged_in: u64,
    pub rows_paged_out: u64,
}

///
/// RecordCounters
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecordCounters {
    pub resolve_failures: u64,
    pub order_calls: u64,
    pub rows_ordered: u64,
    pub degraded: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|state| f(&state.borrow()))
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|state| f(&mut state.borrow_mut()))
}

pub(crate) fn reset_all() {
    with_state_mut(|state| *state = EventState::default());
}

///
/// EventReport
/// Point-in-time snapshot of the counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    /// Per-record counters, busiest (most rows ordered) first.
    pub records: Vec<(String, RecordCounters)>,
}

impl EventReport {
    #[must_use]
    pub fn record(&self, path: &str) -> Option<&RecordCounters> {
        self.records
            .iter()
            .find(|(record, _)| record == path)
            .map(|(_, counters)| counters)
    }
}

pub(crate) fn report() -> EventReport {
    with_state(|state| {
        let mut records: Vec<_> = state
            .records
            .iter()
            .map(|(path, counters)| (path.clone(), *counters))
            .collect();
        records.sort_by(|(left_path, left), (right_path, right)| {
            right
                .rows_ordered
                .cmp(&left.rows_ordered)
                .then_with(|| left_path.cmp(right_path))
        });

        EventReport {
            ops: state.ops,
            records,
        }
    })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_all_clears_state() {
        with_state_mut(|state| {
            state.ops.order_calls = 3;
            state
                .records
                .entry("a::Person".to_string())
                .or_default()
                .rows_ordered = 9;
        });

        reset_all();

        let report = report();
        assert_eq!(report.ops, EventOps::default());
        assert!(report.records.is_empty());
    }

    #[test]
    fn report_sorts_records_by_rows_ordered() {
        reset_all();
        with_state_mut(|state| {
            state.records.entry("a::Small".to_string()).or_default().rows_ordered = 2;
            state.records.entry("a::Large".to_string()).or_default().rows_ordered = 20;
        });

        let report = report();
        let order: Vec<_> = report.records.iter().map(|(path, _)| path.as_str()).collect();

        assert_eq!(order, vec!["a::Large", "a::Small"]);
        assert_eq!(report.record("a::Small").map(|c| c.rows_ordered), Some(2));
    }
}
