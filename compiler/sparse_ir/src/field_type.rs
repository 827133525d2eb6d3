//! Declared field types and per-field flags.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use bitflags::bitflags;

/// Process-unique schema identity.
///
/// Nested-record fields name the schema they accept by id rather than by
/// reference, so a schema can mention itself (`Children: list<record#self>`)
/// without an ownership cycle.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct SchemaId(u32);

static NEXT_SCHEMA_ID: AtomicU32 = AtomicU32::new(0);

impl SchemaId {
    /// Allocate a fresh id. Ids are never reused within a process.
    pub fn fresh() -> Self {
        // Relaxed is enough: only uniqueness matters, not ordering.
        SchemaId(NEXT_SCHEMA_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema#{}", self.0)
    }
}

/// Declared type of a field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Float,
    /// Decimal-like; accepts any value convertible to a decimal.
    Decimal,
    /// Decimal-like and nullable; a null assignment clears the number.
    NullableDecimal,
    /// 128-bit guid-like identifier.
    Guid,
    DateTime,
    Text,
    Bytes,
    /// Homogeneous list; elements are checked against the inner type.
    List(Box<FieldType>),
    /// Nested record built from the identified schema.
    Record(SchemaId),
}

impl FieldType {
    /// Shorthand for `FieldType::List(Box::new(elem))`.
    pub fn list(elem: FieldType) -> Self {
        FieldType::List(Box::new(elem))
    }

    /// Reference-typed fields default to null and accept null on assignment.
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            FieldType::Text | FieldType::Bytes | FieldType::List(_) | FieldType::Record(_)
        )
    }

    /// Decimal-like fields coerce instead of strictly matching.
    pub fn is_decimal_like(&self) -> bool {
        matches!(self, FieldType::Decimal | FieldType::NullableDecimal)
    }

    /// Whether a null value is a legal stored value for this type.
    pub fn admits_null(&self) -> bool {
        self.is_reference() || matches!(self, FieldType::NullableDecimal)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Bool => f.write_str("bool"),
            FieldType::Int => f.write_str("int"),
            FieldType::Float => f.write_str("float"),
            FieldType::Decimal => f.write_str("decimal"),
            FieldType::NullableDecimal => f.write_str("decimal?"),
            FieldType::Guid => f.write_str("guid"),
            FieldType::DateTime => f.write_str("datetime"),
            FieldType::Text => f.write_str("text"),
            FieldType::Bytes => f.write_str("bytes"),
            FieldType::List(elem) => write!(f, "list<{elem}>"),
            FieldType::Record(id) => write!(f, "record<{id}>"),
        }
    }
}

bitflags! {
    /// Per-field markers that do not affect storage.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct FieldFlags: u8 {
        /// Excluded from serialized forms by external codecs.
        ///
        /// Behaves like any other field for get, set and enumeration.
        const IGNORED = 1 << 0;
        /// Contributed by an interface mix-in rather than declared directly.
        const FROM_INTERFACE = 1 << 1;
    }
}
