//! Sparse IR - shared definitions for schema-driven sparse records
//!
//! This crate contains the vocabulary every other `sparse_*` crate speaks:
//! - [`FieldIndex`] for dense, declaration-ordered field positions
//! - [`FieldType`] and [`FieldFlags`] for declared field shapes
//! - [`SchemaId`] for identifying a schema inside nested-record types
//! - [`Decimal`] for decimal-like numeric fields
//! - [`FieldError`] for every structural and per-call failure
//!
//! # Design Philosophy
//!
//! - **Index Everything**: fields are addressed by `FieldIndex(u32)`, never by
//!   name, once a name has been resolved.
//! - **No Runtime Values Here**: values live next to the record that owns them
//!   (`sparse_record`), so this crate stays dependency-light.

mod decimal;
mod error;
mod field_index;
mod field_type;

pub use decimal::{Decimal, ParseDecimalError};
pub use error::{FieldError, FieldResult};
pub use field_index::FieldIndex;
pub use field_type::{FieldFlags, FieldType, SchemaId};
