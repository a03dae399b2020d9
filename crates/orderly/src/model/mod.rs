//! Runtime record models.
//!
//! A [`RecordModel`] is the explicit, per-type field registry consulted by
//! path resolution. It replaces run-time member lookup: every sortable field
//! is declared up front together with a typed reader and its value kind.
//!
//! In general:
//! - `#[derive(Sortable)]` (or a hand-written impl) defines *what exists*
//! - `resolve` turns a dotted path over these models into an accessor

mod field;

#[cfg(test)]
mod tests;

use std::any::TypeId;

// re-exports
pub use field::{FieldKind, FieldModel, ReadLink, ReadScalar, Visibility};

///
/// RecordModel
/// Minimal, macro-generated runtime model for one record type.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Short type name.
    pub name: &'static str,
    /// Identity of the described Rust type; keys the accessor cache.
    pub type_id: fn() -> TypeId,
    /// Ordered field list, including non-public fields.
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    /// Look up one field by its registered name (exact match).
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Iterate over the registered field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }
}
