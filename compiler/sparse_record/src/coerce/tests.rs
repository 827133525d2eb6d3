use std::sync::Arc;

use pretty_assertions::assert_eq;
use sparse_ir::FieldIndex;
use sparse_schema::{compile_schema, Schema, SchemaCompiler};
use uuid::Uuid;

use super::*;
use crate::record::Record;

fn sample() -> Arc<Schema> {
    compile_schema([
        ("Price", FieldType::Decimal),
        ("Quantity", FieldType::NullableDecimal),
        ("Age", FieldType::Int),
        ("Id", FieldType::Guid),
        ("Name", FieldType::Text),
        ("Hats", FieldType::list(FieldType::Text)),
    ])
    .unwrap()
}

fn field(schema: &Schema, name: &str) -> FieldDescriptor {
    schema.lookup(name).unwrap().clone()
}

fn dec(s: &str) -> Value {
    Value::Decimal(s.parse().unwrap())
}

#[test]
fn decimal_fields_convert_numbers() {
    let schema = sample();
    let price = field(&schema, "Price");
    assert_eq!(admit(&price, Value::Int(12)).unwrap(), dec("12"));
    assert_eq!(admit(&price, Value::Float(1.25)).unwrap(), dec("1.25"));
    assert_eq!(admit(&price, Value::Float(0.1 + 0.2)).unwrap(), dec("0.3"));
    assert_eq!(admit(&price, Value::text("3.50")).unwrap(), dec("3.5"));
    assert_eq!(admit(&price, Value::Bool(true)).unwrap(), dec("1"));
    assert_eq!(admit(&price, dec("-0.1")).unwrap(), dec("-0.1"));
}

#[test]
fn null_decimal_policy() {
    let schema = sample();
    assert_eq!(
        admit(&field(&schema, "Price"), Value::Null).unwrap(),
        Value::Decimal(Decimal::ZERO)
    );
    assert_eq!(admit(&field(&schema, "Quantity"), Value::Null).unwrap(), Value::Null);
    assert_eq!(admit(&field(&schema, "Quantity"), Value::Int(4)).unwrap(), dec("4"));
}

#[test]
fn unconvertible_decimal_input_is_rejected() {
    let schema = sample();
    let price = field(&schema, "Price");
    assert_eq!(
        admit(&price, Value::text("lots")).unwrap_err(),
        FieldError::InvalidFieldType {
            field: "Price".to_string(),
            expected: "decimal".to_string(),
            found: "text".to_string(),
        }
    );
    assert!(admit(&price, Value::Float(f64::NAN)).is_err());
    assert!(admit(&price, Value::Guid(Uuid::nil())).is_err());
}

#[test]
fn other_fields_match_strictly() {
    let schema = sample();
    let age = field(&schema, "Age");
    assert_eq!(admit(&age, Value::Int(3)).unwrap(), Value::Int(3));
    assert_eq!(
        admit(&age, Value::text("3")).unwrap_err(),
        FieldError::InvalidFieldType {
            field: "Age".to_string(),
            expected: "int".to_string(),
            found: "text".to_string(),
        }
    );
    assert!(admit(&age, Value::Float(3.0)).is_err());
}

#[test]
fn null_only_for_reference_types() {
    let schema = sample();
    assert!(admit(&field(&schema, "Age"), Value::Null).is_err());
    assert!(admit(&field(&schema, "Id"), Value::Null).is_err());
    assert_eq!(admit(&field(&schema, "Name"), Value::Null).unwrap(), Value::Null);
    assert_eq!(admit(&field(&schema, "Hats"), Value::Null).unwrap(), Value::Null);
}

#[test]
fn list_elements_are_checked() {
    let ty = FieldType::list(FieldType::Text);
    assert!(conforms(&ty, &Value::List(vec![Value::text("a"), Value::Null])));
    assert!(conforms(&ty, &Value::List(Vec::new())));
    assert!(!conforms(&ty, &Value::List(vec![Value::text("a"), Value::Int(1)])));
    assert!(!conforms(&ty, &Value::text("a")));
}

#[test]
fn nested_records_must_match_schema() {
    let inner = compile_schema([("X", FieldType::Int)]).unwrap();
    let other = compile_schema([("X", FieldType::Int)]).unwrap();
    let ty = FieldType::Record(inner.id());

    assert!(conforms(&ty, &Value::record(Record::new(Arc::clone(&inner)))));
    assert!(!conforms(&ty, &Value::record(Record::new(other))));
    assert!(conforms(&ty, &Value::Null));
}

#[test]
fn self_referential_record_field() {
    let compiler = SchemaCompiler::new();
    let me = compiler.id();
    let schema = compiler.field("Next", FieldType::Record(me)).compile().unwrap();
    let next = schema.descriptor(FieldIndex::from_raw(0)).unwrap().clone();
    let child = Record::new(Arc::clone(&schema));
    assert!(admit(&next, Value::record(child)).is_ok());
}

#[test]
fn to_decimal_rejects_non_numeric() {
    assert_eq!(to_decimal(&Value::Null), None);
    assert_eq!(to_decimal(&Value::Bytes(vec![1])), None);
    assert_eq!(to_decimal(&Value::Int(-5)), Some(Decimal::from(-5_i64)));
}
