//! Field-path resolution.
//!
//! A dotted path such as `Address.City` is resolved once per
//! `(record type, path)` pair against the record's [`RecordModel`] and the
//! nested models it links to. The result is an immutable [`FieldAccessor`]
//! stored in a process-wide insert-if-absent cache and shared by every later
//! request for the same pair.

mod accessor;

#[cfg(test)]
mod tests;

use crate::{
    error::{FieldNotFoundError, MissingReason},
    model::{FieldKind, RecordModel},
    obs::sink::{self, MetricsEvent},
    traits::Sortable,
};
use dashmap::DashMap;
use std::{
    any::TypeId,
    sync::{Arc, LazyLock},
};
use tracing::debug;

// re-exports
pub use accessor::FieldAccessor;

/// Path separator between nested field names.
pub const PATH_SEPARATOR: char = '.';

type CacheKey = (TypeId, String);

// Resolved accessors, populated on first successful resolution and never evicted.
static ACCESSORS: LazyLock<DashMap<CacheKey, Arc<FieldAccessor>>> = LazyLock::new(DashMap::new);

/// Resolve `path` against the field registry of `T`.
pub fn resolve<T: Sortable>(path: &str) -> Result<Arc<FieldAccessor>, FieldNotFoundError> {
    resolve_model(T::model(), path)
}

/// Resolve `path` against an explicit record descriptor.
///
/// Successful resolutions are cached by `(type, path)`. Concurrent first
/// resolutions of one key may both walk the model, but only the first
/// inserted accessor is kept and handed to every caller.
pub fn resolve_model(
    model: &'static RecordModel,
    path: &str,
) -> Result<Arc<FieldAccessor>, FieldNotFoundError> {
    let key = (model.type_id(), path.to_string());

    let cached = ACCESSORS.get(&key).map(|entry| Arc::clone(entry.value()));
    if let Some(accessor) = cached {
        sink::record(MetricsEvent::Resolve {
            record: model.path,
            cached: true,
        });

        return Ok(accessor);
    }

    let accessor = match resolve_uncached(model, path) {
        Ok(accessor) => Arc::new(accessor),
        Err(err) => {
            sink::record(MetricsEvent::ResolveFailed { record: model.path });
            debug!(record = model.path, path, error = %err, "field path did not resolve");

            return Err(err);
        }
    };

    let accessor = Arc::clone(ACCESSORS.entry(key).or_insert(accessor).value());
    sink::record(MetricsEvent::Resolve {
        record: model.path,
        cached: false,
    });
    debug!(
        record = model.path,
        path,
        kind = %accessor.kind(),
        depth = accessor.depth(),
        "resolved field path"
    );

    Ok(accessor)
}

/// Number of accessors currently cached for the whole process.
#[must_use]
pub fn cached_accessors() -> usize {
    ACCESSORS.len()
}

// Walk the path segment by segment without touching the cache.
fn resolve_uncached(
    model: &'static RecordModel,
    path: &str,
) -> Result<FieldAccessor, FieldNotFoundError> {
    let mut current = model;
    let mut links = Vec::new();
    let mut segments = path.split(PATH_SEPARATOR).peekable();

    while let Some(segment) = segments.next() {
        let missing = |owner: &str, reason| {
            FieldNotFoundError::new(model.path, path, segment, owner, reason)
        };

        let field = current
            .field(segment)
            .ok_or_else(|| missing(current.name, MissingReason::NoSuchMember))?;

        match (&field.kind, segments.peek()) {
            (FieldKind::Scalar { kind, read }, None) => {
                return Ok(FieldAccessor::new(model, path, *kind, links, *read));
            }
            (FieldKind::Scalar { kind, .. }, Some(next)) => {
                return Err(FieldNotFoundError::new(
                    model.path,
                    path,
                    next,
                    kind.as_str(),
                    MissingReason::ScalarHasNoMembers,
                ));
            }
            (FieldKind::Record { .. }, None) => {
                return Err(missing(current.name, MissingReason::NotComparable));
            }
            (FieldKind::Record { model: nested, link }, Some(_)) => {
                links.push(*link);
                current = nested();
            }
        }
    }

    // `split` always yields at least one segment
    Err(FieldNotFoundError::new(
        model.path,
        path,
        path,
        model.name,
        MissingReason::NoSuchMember,
    ))
}
