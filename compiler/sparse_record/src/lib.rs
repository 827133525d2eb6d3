//! Sparse records.
//!
//! A [`Record`] stores one typed slot per schema field plus one
//! [`PresenceGroup`](sparse_schema::PresenceGroup) per 32 fields. A field is
//! *set* once it has been explicitly assigned, whatever the value (null
//! included); an unset field still holds its type's default but reads as
//! absent.
//!
//! # Operations
//!
//! - [`Record::set`] type-checks and stores a value, marking it present
//! - [`Record::try_get`] returns the value only when present
//! - [`Record::copy`] duplicates slots and presence by value
//! - [`Record::iter`] yields `(name, value)` for set fields in index order
//!
//! Each index-based operation has a name-based counterpart that resolves
//! through the schema's compiled resolver and reports `KeyNotFound` for
//! unknown names.
//!
//! # Type Checking
//!
//! Decimal-like fields coerce anything convertible to a decimal; every other
//! field matches strictly. See [`admit`] for the full policy.

mod coerce;
mod enumerator;
mod factory;
mod record;
mod typed;
mod value;

pub use coerce::{admit, conforms, to_decimal};
pub use enumerator::FieldEnumerator;
pub use factory::RecordFactory;
pub use record::Record;
pub use typed::FromValue;
pub use value::Value;

pub use chrono::NaiveDateTime;
pub use uuid::Uuid;
