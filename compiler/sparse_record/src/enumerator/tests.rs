use std::sync::Arc;

use pretty_assertions::assert_eq;
use sparse_ir::FieldType;
use sparse_schema::{compile_schema, Schema};

use super::*;

fn wide(count: usize) -> Arc<Schema> {
    let fields: Vec<(String, FieldType)> =
        (0..count).map(|i| (format!("F{i}"), FieldType::Int)).collect();
    compile_schema(fields).unwrap()
}

fn idx(raw: u32) -> FieldIndex {
    FieldIndex::from_raw(raw)
}

#[test]
fn yields_set_fields_in_index_order() {
    let schema = compile_schema([
        ("Id", FieldType::Guid),
        ("Name", FieldType::Text),
        ("Age", FieldType::Int),
    ])
    .unwrap();
    let mut record = Record::new(schema);
    record.set_by_name("Age", 3).unwrap();
    record.set_by_name("Name", "Zed").unwrap();

    let seen: Vec<(&str, &Value)> = record.iter().collect();
    assert_eq!(
        seen,
        [("Name", &Value::text("Zed")), ("Age", &Value::Int(3))]
    );
}

#[test]
fn skips_empty_groups() {
    let mut record = Record::new(wide(100));
    for raw in [99, 3, 64, 31, 32] {
        record.set(idx(raw), i64::from(raw)).unwrap();
    }
    let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["F3", "F31", "F32", "F64", "F99"]);
    assert_eq!(record.iter().len(), 5);
}

#[test]
fn cursor_protocol() {
    let mut record = Record::new(wide(3));
    record.set(idx(1), 10).unwrap();

    let mut cursor = record.iter();
    assert_eq!(cursor.current(), None);
    assert!(cursor.move_next());
    assert_eq!(cursor.current(), Some(("F1", &Value::Int(10))));
    assert_eq!(cursor.current_index(), Some(idx(1)));
    assert!(!cursor.move_next());
    assert_eq!(cursor.current(), None);
    assert!(!cursor.move_next());
    assert_eq!(cursor.reset(), Err(FieldError::ResetUnsupported));
}

#[test]
fn empty_record_and_empty_schema() {
    let record = Record::new(wide(40));
    assert_eq!(record.iter().next(), None);

    let empty = Record::new(wide(0));
    let mut cursor = empty.iter();
    assert!(!cursor.move_next());
    assert_eq!(cursor.size_hint(), (0, Some(0)));
}

#[test]
fn size_hint_tracks_progress() {
    let mut record = Record::new(wide(70));
    for raw in [0, 1, 40, 69] {
        record.set(idx(raw), 0).unwrap();
    }
    let mut iter = record.iter();
    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 1);
    iter.next();
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn into_iterator_for_reference() {
    let mut record = Record::new(wide(2));
    record.set(idx(0), 1).unwrap();
    let mut count = 0;
    for (name, value) in &record {
        assert_eq!(name, "F0");
        assert_eq!(value, &Value::Int(1));
        count += 1;
    }
    assert_eq!(count, 1);
}

#[test]
fn cursor_resumes_after_last_yielded_index() {
    let mut record = Record::new(wide(70));
    for raw in [3, 40] {
        record.set(idx(raw), 0).unwrap();
    }
    let mut cursor = record.iter();
    assert_eq!(cursor.position(), idx(0));
    assert!(cursor.move_next());
    assert_eq!(cursor.current_index(), Some(idx(3)));
    assert_eq!(cursor.position(), idx(4));
    assert!(cursor.move_next());
    assert_eq!(cursor.current_index(), Some(idx(40)));
    assert_eq!(cursor.position(), idx(41));
    assert!(!cursor.move_next());
    assert!(cursor.position().index() >= 70);
    assert!(!cursor.move_next());
}

#[test]
fn last_bit_of_a_full_group() {
    let mut record = Record::new(wide(64));
    for raw in 0..64 {
        record.set(idx(raw), i64::from(raw)).unwrap();
    }
    let indices: Vec<u32> = {
        let mut cursor = record.iter();
        let mut seen = Vec::new();
        while cursor.move_next() {
            seen.push(cursor.current_index().unwrap().raw());
        }
        seen
    };
    assert_eq!(indices, (0..64).collect::<Vec<_>>());
}
