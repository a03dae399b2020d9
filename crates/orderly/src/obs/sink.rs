//! Metrics sink boundary.
//!
//! Resolution and ordering code MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//!
//! This module is the only allowed bridge between sort logic and the
//! per-thread metrics state.
use crate::obs::metrics::{self, EventReport};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    Resolve {
        record: &'static str,
        cached: bool,
    },
    ResolveFailed {
        record: &'static str,
    },
    KeySkipped {
        record: &'static str,
    },
    Degraded {
        record: &'static str,
        rows: u64,
    },
    Ordered {
        record: &'static str,
        rows: u64,
        keys: u64,
    },
    Paged {
        rows_in: u64,
        rows_out: u64,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the per-thread metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::Resolve { cached, .. } => {
                metrics::with_state_mut(|m| {
                    if cached {
                        m.ops.resolve_hits = m.ops.resolve_hits.saturating_add(1);
                    } else {
                        m.ops.resolve_misses = m.ops.resolve_misses.saturating_add(1);
                    }
                });
            }

            MetricsEvent::ResolveFailed { record } => {
                metrics::with_state_mut(|m| {
                    m.ops.resolve_failures = m.ops.resolve_failures.saturating_add(1);
                    let entry = m.records.entry(record.to_string()).or_default();
                    entry.resolve_failures = entry.resolve_failures.saturating_add(1);
                });
            }

            MetricsEvent::KeySkipped { .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.keys_skipped = m.ops.keys_skipped.saturating_add(1);
                });
            }

            MetricsEvent::Degraded { record, .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.degraded = m.ops.degraded.saturating_add(1);
                    let entry = m.records.entry(record.to_string()).or_default();
                    entry.degraded = entry.degraded.saturating_add(1);
                });
            }

            MetricsEvent::Ordered { record, rows, .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.order_calls = m.ops.order_calls.saturating_add(1);
                    m.ops.rows_ordered = m.ops.rows_ordered.saturating_add(rows);
                    let entry = m.records.entry(record.to_string()).or_default();
                    entry.order_calls = entry.order_calls.saturating_add(1);
                    entry.rows_ordered = entry.rows_ordered.saturating_add(rows);
                });
            }

            MetricsEvent::Paged { rows_in, rows_out } => {
                metrics::with_state_mut(|m| {
                    m.ops.page_calls = m.ops.page_calls.saturating_add(1);
                    m.ops.rows_paged_in = m.ops.rows_paged_in.saturating_add(rows_in);
                    m.ops.rows_paged_out = m.ops.rows_paged_out.saturating_add(rows_out);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in `with_metrics_sink`.
        // - `with_metrics_sink` restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current thread's metrics state.
#[must_use]
pub fn metrics_report() -> EventReport {
    metrics::report()
}

/// Reset the current thread's metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override on this thread.
pub(crate) fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
