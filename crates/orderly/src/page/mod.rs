//! Offset/limit pagination over an ordered sequence.


use crate::obs::sink::{self, MetricsEvent};
use serde::{Deserialize, Serialize};

///
/// PageSpec
///
/// Normalized pagination request.
///
/// Raw `(start, size)` pairs follow the listing convention:
/// - `size <= 0` disables paging (`limit` is `None`)
/// - a negative `start` is clamped to zero
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageSpec {
    pub offset: usize,
    pub limit: Option<usize>,
}

impl PageSpec {
    /// Build from a raw start row and page size.
    #[must_use]
    pub fn new(start: i64, size: i64) -> Self {
        let limit = (size > 0).then(|| usize::try_from(size).unwrap_or(usize::MAX));
        let offset = usize::try_from(start.max(0)).unwrap_or(usize::MAX);

        Self { offset, limit }
    }

    /// Build from a zero-based page number and page size.
    #[must_use]
    pub fn for_page(index: usize, size: usize) -> Self {
        if size == 0 {
            return Self::unbounded();
        }

        Self {
            offset: index.saturating_mul(size),
            limit: Some(size),
        }
    }

    /// Paging disabled; the sequence passes through.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            offset: 0,
            limit: None,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.limit.is_some()
    }

    /// Cap the page size; an unbounded spec stays unbounded.
    /// A `max` of zero sets no cap, matching `size <= 0` elsewhere.
    #[must_use]
    pub fn with_max_size(mut self, max: usize) -> Self {
        if max > 0 {
            self.limit = self.limit.map(|limit| limit.min(max));
        }
        self
    }

    /// Apply offset/limit pagination in place.
    pub fn apply_in_place<T>(&self, rows: &mut Vec<T>) {
        let Some(limit) = self.limit else {
            return;
        };
        let rows_in = rows.len();

        // If offset is past the end, clear everything
        if self.offset >= rows.len() {
            rows.clear();
        } else {
            let end = self.offset.saturating_add(limit).min(rows.len());

            // Drop leading rows, then truncate to window size
            rows.truncate(end);
            rows.drain(..self.offset);
        }

        sink::record(MetricsEvent::Paged {
            rows_in: rows_in as u64,
            rows_out: rows.len() as u64,
        });
    }

    /// Apply pagination to an owned sequence.
    #[must_use]
    pub fn apply<T>(&self, mut rows: Vec<T>) -> Vec<T> {
        self.apply_in_place(&mut rows);
        rows
    }

    /// Apply pagination and keep the metadata needed to render a pager.
    #[must_use]
    pub fn paged<T>(&self, rows: Vec<T>) -> Paged<T> {
        let total_count = rows.len();
        let records = self.apply(rows);

        Paged {
            offset: if self.is_enabled() { self.offset } else { 0 },
            total_count,
            records,
        }
    }
}

///
/// Paged
///
/// One page of records plus the totals of the sequence it was cut from.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Paged<T> {
    records: Vec<T>,
    offset: usize,
    total_count: usize,
}

impl<T> Paged<T> {
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Position of the first record of this page in the full sequence.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the full sequence before paging.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when records remain after this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.records.len()) < self.total_count
    }
}

/// Slice `rows` to `[start, start + size)`.
///
/// `size <= 0` returns `rows` unchanged; a `start` at or past the end yields
/// an empty page; a negative `start` counts from zero.
#[must_use]
pub fn page<T>(rows: Vec<T>, start: i64, size: i64) -> Vec<T> {
    PageSpec::new(start, size).apply(rows)
}
