//! Observability: runtime counters and the sink abstraction.
//!
//! Ordering and resolution code never touches `metrics` directly; every
//! event flows through [`MetricsEvent`] and the active [`MetricsSink`].

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport, RecordCounters};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all};
