//! Typed reads out of [`Value`].

use chrono::NaiveDateTime;
use sparse_ir::Decimal;
use uuid::Uuid;

use crate::record::Record;
use crate::value::Value;

/// Conversion from a stored value into a concrete Rust type.
///
/// Conversions are exact: an `i64` is not read back as `f64`. Null converts
/// only into `Option<T>` (as `None`) and into [`Value`] itself.
pub trait FromValue: Sized {
    /// Kind name reported when conversion fails.
    const KIND: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($ty:ty, $kind:literal, $variant:ident, |$inner:ident| $read:expr) => {
        impl FromValue for $ty {
            const KIND: &'static str = $kind;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant($inner) => Some($read),
                    _ => None,
                }
            }
        }
    };
}

impl_from_value!(bool, "bool", Bool, |b| *b);
impl_from_value!(i64, "int", Int, |i| *i);
impl_from_value!(f64, "float", Float, |f| *f);
impl_from_value!(Decimal, "decimal", Decimal, |d| *d);
impl_from_value!(Uuid, "guid", Guid, |g| *g);
impl_from_value!(NaiveDateTime, "datetime", DateTime, |t| *t);
impl_from_value!(String, "text", Text, |s| s.clone());
impl_from_value!(Vec<u8>, "bytes", Bytes, |b| b.clone());
impl_from_value!(Vec<Value>, "list", List, |items| items.clone());

impl FromValue for Record {
    const KIND: &'static str = "record";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Record(record) => Some(Record::clone(record)),
            _ => None,
        }
    }
}

impl FromValue for Value {
    const KIND: &'static str = "value";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const KIND: &'static str = T::KIND;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}
