//! Multi-key ordering.
//!
//! A [`SortSpec`] is compiled into an [`OrderPlan`]: every key is resolved up
//! front, then the `(accessor, direction)` list is folded into one comparator
//! and applied through a stable sort.


use crate::{
    config::UnknownFieldPolicy,
    error::{FieldNotFoundError, SortError},
    obs::sink::{self, MetricsEvent},
    resolve::{FieldAccessor, resolve},
    spec::{Direction, SortSpec},
    traits::Sortable,
    value::{TextOrder, Value, canonical_cmp_with},
};
use std::{cmp::Ordering, fmt, marker::PhantomData, sync::Arc};
use tracing::warn;

///
/// OrderOptions
/// Knobs applied when compiling and running an ordering plan.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OrderOptions {
    pub unknown_field: UnknownFieldPolicy,
    pub text_order: TextOrder,
}

///
/// OrderKey
///

struct OrderKey {
    accessor: Arc<FieldAccessor>,
    direction: Direction,
}

///
/// OrderPlan
///
/// Compiled multi-key comparator for records of type `T`.
///
/// Design notes:
/// - Keys keep the declared priority; later keys only break ties
/// - Each key has its own direction
/// - Rows equal on every key keep their input order (stable sort); no
///   implicit identity key is appended
///

pub struct OrderPlan<T> {
    keys: Vec<OrderKey>,
    text_order: TextOrder,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Sortable> OrderPlan<T> {
    /// Compile with default options (whole-spec abort on an unknown field).
    pub fn compile(spec: &SortSpec) -> Result<Self, FieldNotFoundError> {
        Self::compile_with(spec, OrderOptions::default())
    }

    /// Resolve every key of `spec` against `T`.
    ///
    /// With `UnknownFieldPolicy::Abort` the first unresolvable key fails the
    /// whole plan; with `SkipKey` it is dropped and the rest are kept.
    pub fn compile_with(
        spec: &SortSpec,
        options: OrderOptions,
    ) -> Result<Self, FieldNotFoundError> {
        let mut keys = Vec::with_capacity(spec.len());

        for key in spec {
            match resolve::<T>(&key.field) {
                Ok(accessor) => keys.push(OrderKey {
                    accessor,
                    direction: key.direction,
                }),
                Err(err) => match options.unknown_field {
                    UnknownFieldPolicy::Abort => return Err(err),
                    UnknownFieldPolicy::SkipKey => {
                        sink::record(MetricsEvent::KeySkipped {
                            record: T::model().path,
                        });
                        warn!(record = T::model().path, error = %err, "skipping unknown sort key");
                    }
                },
            }
        }

        Ok(Self {
            keys,
            text_order: options.text_order,
            _marker: PhantomData,
        })
    }

    /// Number of keys that survived compilation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compare two records key by key, returning the first non-equal ordering.
    #[must_use]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        for key in &self.keys {
            let ordering = canonical_cmp_with(
                &key.accessor.value(left),
                &key.accessor.value(right),
                self.text_order,
            );
            let ordering = apply_direction(ordering, key.direction);

            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }

    /// Sort `rows` in place.
    pub fn apply(&self, rows: &mut Vec<T>) {
        if self.keys.is_empty() {
            return;
        }

        sink::record(MetricsEvent::Ordered {
            record: T::model().path,
            rows: rows.len() as u64,
            keys: self.keys.len() as u64,
        });

        if rows.len() < 2 {
            return;
        }

        // Phase 1: read every key once per row.
        let mut keyed: Vec<(Vec<Value>, T)> = rows
            .drain(..)
            .map(|row| (self.read_keys(&row), row))
            .collect();

        // Phase 2: stable sort on the precomputed key tuples.
        keyed.sort_by(|(left, _), (right, _)| self.compare_keys(left, right));

        // Phase 3: restore the ordered rows.
        rows.extend(keyed.into_iter().map(|(_, row)| row));
    }

    fn read_keys(&self, row: &T) -> Vec<Value> {
        self.keys.iter().map(|key| key.accessor.value(row)).collect()
    }

    fn compare_keys(&self, left: &[Value], right: &[Value]) -> Ordering {
        for ((key, left), right) in self.keys.iter().zip(left).zip(right) {
            let ordering = canonical_cmp_with(left, right, self.text_order);
            let ordering = apply_direction(ordering, key.direction);

            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }
}

impl<T> fmt::Debug for OrderPlan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<_> = self
            .keys
            .iter()
            .map(|key| (key.accessor.path(), key.direction))
            .collect();

        f.debug_struct("OrderPlan")
            .field("keys", &keys)
            .field("text_order", &self.text_order)
            .finish()
    }
}

const fn apply_direction(ordering: Ordering, direction: Direction) -> Ordering {
    match direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}

/// Order `rows` by `spec`, degrading to the input order when any key fails
/// to resolve.
#[must_use]
pub fn apply<T: Sortable>(rows: Vec<T>, spec: &SortSpec) -> Vec<T> {
    apply_with(rows, spec, OrderOptions::default())
}

/// [`apply`] with explicit options.
#[must_use]
pub fn apply_with<T: Sortable>(
    mut rows: Vec<T>,
    spec: &SortSpec,
    options: OrderOptions,
) -> Vec<T> {
    if let Err(err) = try_apply_with(&mut rows, spec, options) {
        sink::record(MetricsEvent::Degraded {
            record: T::model().path,
            rows: rows.len() as u64,
        });
        warn!(
            record = T::model().path,
            spec = %spec,
            error = %err,
            "sort request degraded to unsorted"
        );
    }

    rows
}

/// Order `rows` in place by `spec`.
/// On error `rows` is left untouched.
pub fn try_apply<T: Sortable>(rows: &mut Vec<T>, spec: &SortSpec) -> Result<(), SortError> {
    try_apply_with(rows, spec, OrderOptions::default())
}

/// [`try_apply`] with explicit options.
pub fn try_apply_with<T: Sortable>(
    rows: &mut Vec<T>,
    spec: &SortSpec,
    options: OrderOptions,
) -> Result<(), SortError> {
    if spec.is_empty() {
        return Ok(());
    }

    let plan = OrderPlan::<T>::compile_with(spec, options)?;
    plan.apply(rows);

    Ok(())
}
