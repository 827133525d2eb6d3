//! Assignment type checks.
//!
//! Two policies, chosen by the declared type:
//!
//! - **Decimal-like** (`decimal`, `decimal?`): any value convertible to a
//!   decimal is accepted and converted. Null stores zero in a `decimal` field
//!   and clears a `decimal?` field.
//! - **Everything else**: the value's runtime kind must match the declared
//!   type exactly. Null is accepted only by reference types (text, bytes,
//!   lists, records). List elements are checked recursively; nested records
//!   must come from the declared schema.

use sparse_ir::{Decimal, FieldError, FieldResult, FieldType};
use sparse_schema::FieldDescriptor;

use crate::value::Value;

/// Check `value` against `field` and return what should be stored.
pub fn admit(field: &FieldDescriptor, value: Value) -> FieldResult<Value> {
    match field.ty() {
        FieldType::Decimal => match value {
            Value::Null => Ok(Value::Decimal(Decimal::ZERO)),
            other => coerce_decimal(field, &other),
        },
        FieldType::NullableDecimal => match value {
            Value::Null => Ok(Value::Null),
            other => coerce_decimal(field, &other),
        },
        ty if conforms(ty, &value) => Ok(value),
        _ => Err(mismatch(field, &value)),
    }
}

fn coerce_decimal(field: &FieldDescriptor, value: &Value) -> FieldResult<Value> {
    to_decimal(value)
        .map(Value::Decimal)
        .ok_or_else(|| mismatch(field, value))
}

/// Numeric conversion used by decimal-like fields.
///
/// Booleans convert to 1 or 0, integers exactly, finite floats rounded to 15
/// significant digits, and text when it holds a decimal literal.
pub fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Bool(b) => Some(if *b { Decimal::ONE } else { Decimal::ZERO }),
        Value::Int(i) => Some(Decimal::from(*i)),
        Value::Float(f) => Decimal::from_f64(*f),
        Value::Decimal(d) => Some(*d),
        Value::Text(s) => s.parse().ok(),
        _ => None,
    }
}

/// Strict structural match of `value` against `ty`.
pub fn conforms(ty: &FieldType, value: &Value) -> bool {
    match (ty, value) {
        (_, Value::Null) => ty.admits_null(),
        (FieldType::Bool, Value::Bool(_))
        | (FieldType::Int, Value::Int(_))
        | (FieldType::Float, Value::Float(_))
        | (FieldType::Decimal | FieldType::NullableDecimal, Value::Decimal(_))
        | (FieldType::Guid, Value::Guid(_))
        | (FieldType::DateTime, Value::DateTime(_))
        | (FieldType::Text, Value::Text(_))
        | (FieldType::Bytes, Value::Bytes(_)) => true,
        (FieldType::List(elem), Value::List(items)) => items.iter().all(|item| conforms(elem, item)),
        (FieldType::Record(id), Value::Record(record)) => record.schema().id() == *id,
        _ => false,
    }
}

fn mismatch(field: &FieldDescriptor, value: &Value) -> FieldError {
    FieldError::InvalidFieldType {
        field: field.name().to_owned(),
        expected: field.ty().to_string(),
        found: value.kind().to_owned(),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
