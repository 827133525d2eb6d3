//! Schema-driven sparse records.
//!
//! Declare fields once, compile them into a [`Schema`], then create any
//! number of [`Record`]s that share it:
//!
//! ```
//! use sparse::{compile_schema, FieldType, Record, Resolution, Value};
//!
//! let schema = compile_schema([
//!     ("Id", FieldType::Guid),
//!     ("Name", FieldType::Text),
//!     ("Age", FieldType::Int),
//! ])?;
//! assert!(matches!(schema.resolve("Age"), Resolution::Field(f) if f.index() == 2));
//!
//! let mut person = Record::new(schema);
//! person.set_by_name("Age", 36)?;
//! assert!(person.contains("Age"));
//! assert!(!person.contains("Name"));
//! assert_eq!(person.get_by_name("Age")?, &Value::Int(36));
//! # Ok::<(), sparse::FieldError>(())
//! ```
//!
//! # Crates
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `sparse_ir` | Field types, indices, decimals, errors |
//! | `sparse_resolve` | Radix tree and compiled name resolver |
//! | `sparse_schema` | Schema compiler and presence layout |
//! | `sparse_record` | Records, values, enumeration |

use std::sync::Once;

pub use sparse_ir::{
    Decimal, FieldError, FieldFlags, FieldIndex, FieldResult, FieldType, ParseDecimalError,
    SchemaId,
};
pub use sparse_record::{
    FieldEnumerator, FromValue, NaiveDateTime, Record, RecordFactory, Uuid, Value,
};
pub use sparse_resolve::{DispatchOptions, NameResolver, RadixTree, Resolution};
pub use sparse_schema::{
    compile_schema, FieldDescriptor, Interface, PresenceGroup, Schema, SchemaCompiler,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for the debug events emitted while
/// compiling schemas and resolvers.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=sparse_schema=debug,sparse_resolve=debug`. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
