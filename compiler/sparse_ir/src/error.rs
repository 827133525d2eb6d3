//! Error types for schema compilation and record access.
//!
//! Structural errors (`DuplicateField`, `EmptyFieldName`,
//! `UnsupportedCharacter`, `ConflictingFieldType`, `TooManyFields`) abort
//! compilation before any artifact is handed out. Per-call errors
//! (`KeyNotFound`, `InvalidFieldType`, `FieldOutOfRange`, `ResetUnsupported`)
//! are returned to the immediate caller.
//!
//! An unknown name is *not* an error at the resolver level: resolution
//! returns an `Unresolved` sentinel and only the name-based record wrappers
//! turn it into `KeyNotFound`.

use thiserror::Error;

/// Result alias used throughout the `sparse_*` crates.
pub type FieldResult<T> = Result<T, FieldError>;

/// Every failure the record engine can report.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Two field names collide under case-insensitive comparison.
    #[error("duplicate case-insensitive field: {name}")]
    DuplicateField { name: String },

    /// A field was declared with an empty name.
    #[error("field names must not be empty")]
    EmptyFieldName,

    /// A field name holds a character that cannot be packed into one byte.
    #[error("unsupported character {ch:?} at offset {offset} in {name:?}")]
    UnsupportedCharacter {
        name: String,
        ch: char,
        offset: usize,
    },

    /// An interface re-declares an existing field with another type.
    #[error("field '{name}' declared as {existing} and {requested}")]
    ConflictingFieldType {
        name: String,
        existing: String,
        requested: String,
    },

    /// The schema has more fields than a `FieldIndex` can address.
    #[error("schema declares {count} fields, more than a field index can address")]
    TooManyFields { count: usize },

    /// A name-based access found no matching (or no assigned) field.
    #[error("key not found: {name}")]
    KeyNotFound { name: String },

    /// A value failed the type check for its field.
    #[error("invalid value for field '{field}': expected {expected}, found {found}")]
    InvalidFieldType {
        field: String,
        expected: String,
        found: String,
    },

    /// A field index that does not belong to the record's schema.
    #[error("field index {index} out of range for schema with {len} fields")]
    FieldOutOfRange { index: u32, len: usize },

    /// Field enumerators are single-pass.
    #[error("field enumerators cannot be reset")]
    ResetUnsupported,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unsupported_character_message_names_offset() {
        let err = FieldError::UnsupportedCharacter {
            name: "naïve€".to_string(),
            ch: '€',
            offset: 5,
        };
        assert_eq!(
            err.to_string(),
            "unsupported character '€' at offset 5 in \"naïve€\""
        );
    }

    #[test]
    fn invalid_field_type_message() {
        let err = FieldError::InvalidFieldType {
            field: "Age".to_string(),
            expected: "int".to_string(),
            found: "text".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for field 'Age': expected int, found text"
        );
    }
}
