use crate::{
    model::RecordModel,
    value::{Value, ValueKind},
};
use std::any::Any;

/// Read a scalar field from a record of the owning type.
/// Returns `None` when the record is not of the owning type.
pub type ReadScalar = fn(&dyn Any) -> Option<Value>;

/// Follow a nested-record field to the nested record.
/// Returns `None` for an absent optional link or a foreign record type.
pub type ReadLink = fn(&dyn Any) -> Option<&dyn Any>;

///
/// FieldModel
/// Runtime field metadata used by path resolution.
///

#[derive(Debug)]
pub struct FieldModel {
    /// Field name as used in sort expressions.
    pub name: &'static str,
    /// Rust identifier of the field.
    pub ident: &'static str,
    /// Declared visibility; every visibility is resolvable.
    pub visibility: Visibility,
    pub kind: FieldKind,
}

impl FieldModel {
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self.kind, FieldKind::Record { .. })
    }
}

///
/// FieldKind
///
/// Either a comparable scalar or a link into a nested record model.
///

#[derive(Debug)]
pub enum FieldKind {
    Scalar {
        kind: ValueKind,
        read: ReadScalar,
    },
    Record {
        model: fn() -> &'static RecordModel,
        link: ReadLink,
    },
}

///
/// Visibility
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`, `pub(super)`, `pub(in ..)`
    Restricted,
    /// No visibility modifier.
    Private,
}
