use crate::{
    model::{ReadLink, ReadScalar, RecordModel},
    traits::Sortable,
    value::{Value, ValueKind},
};
use std::{
    any::{Any, TypeId},
    fmt,
};

///
/// FieldAccessor
///
/// Resolved, immutable reader for one `(record type, field path)` pair.
/// Follows the nested-record links in order, then reads the terminal scalar.
/// A missing optional link reads as `Value::Null`.
///

pub struct FieldAccessor {
    record: &'static RecordModel,
    type_id: TypeId,
    path: String,
    kind: ValueKind,
    links: Vec<ReadLink>,
    read: ReadScalar,
}

impl FieldAccessor {
    pub(super) fn new(
        record: &'static RecordModel,
        path: &str,
        kind: ValueKind,
        links: Vec<ReadLink>,
        read: ReadScalar,
    ) -> Self {
        Self {
            record,
            type_id: record.type_id(),
            path: path.to_string(),
            kind,
            links,
            read,
        }
    }

    /// Read the field from a typed record.
    #[must_use]
    pub fn value<T: Sortable>(&self, record: &T) -> Value {
        self.read_any(record)
    }

    /// Read the field from a type-erased record.
    /// A record of another type reads as `Value::Null`.
    #[must_use]
    pub fn read_any(&self, record: &dyn Any) -> Value {
        let mut current = record;
        for link in &self.links {
            match link(current) {
                Some(next) => current = next,
                None => return Value::Null,
            }
        }

        (self.read)(current).unwrap_or(Value::Null)
    }

    /// Terminal value kind; decides numeric, lexical or temporal comparison.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn record(&self) -> &'static RecordModel {
        self.record
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Number of nested-record hops before the terminal field.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.links.len()
    }
}

impl fmt::Debug for FieldAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("record", &self.record.path)
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("depth", &self.links.len())
            .finish_non_exhaustive()
    }
}
