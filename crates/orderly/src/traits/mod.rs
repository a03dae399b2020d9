
use crate::{
    model::RecordModel,
    value::{Value, ValueKind},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::{any::Any, rc::Rc, sync::Arc};

///
/// Sortable
///
/// A record type with an explicit field registry.
/// Usually generated by `#[derive(Sortable)]`; a hand-written impl must
/// return a model whose readers downcast to `Self`.
///

pub trait Sortable: Any {
    /// Field registry for this record type.
    fn model() -> &'static RecordModel;
}

///
/// FieldValue
///
/// Conversion from a scalar field to a comparable [`Value`].
/// `KIND` is the terminal value type recorded on resolved accessors.
///

pub trait FieldValue {
    const KIND: ValueKind;

    fn to_value(&self) -> Value;
}

impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    const KIND: ValueKind = T::KIND;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Box<T> {
    const KIND: ValueKind = T::KIND;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Rc<T> {
    const KIND: ValueKind = T::KIND;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Arc<T> {
    const KIND: ValueKind = T::KIND;

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

// impl_field_value
macro_rules! impl_field_value {
    ($kind:ident => $variant:ident: $($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: ValueKind = ValueKind::$kind;

                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }
        )*
    };
}

impl_field_value!(Bool => Bool: bool);
impl_field_value!(Int => Int: i8, i16, i32, i64);
impl_field_value!(Uint => Uint: u8, u16, u32, u64);
impl_field_value!(Float => Float: f32, f64);
impl_field_value!(Date => Date: NaiveDate);
impl_field_value!(Timestamp => Timestamp: DateTime<Utc>);

impl FieldValue for usize {
    const KIND: ValueKind = ValueKind::Uint;

    fn to_value(&self) -> Value {
        Value::Uint(u64::try_from(*self).unwrap_or(u64::MAX))
    }
}

impl FieldValue for isize {
    const KIND: ValueKind = ValueKind::Int;

    fn to_value(&self) -> Value {
        Value::Int(i64::try_from(*self).unwrap_or(if *self < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl FieldValue for NaiveDateTime {
    const KIND: ValueKind = ValueKind::Timestamp;

    fn to_value(&self) -> Value {
        Value::Timestamp(self.and_utc())
    }
}

impl FieldValue for str {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for char {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}
