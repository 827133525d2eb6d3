//! Schema compilation.
//!
//! A [`SchemaCompiler`] turns an ordered list of `(name, type)` declarations
//! into an immutable [`Schema`]:
//!
//! 1. **Merge** interface mix-ins ([`Interface`]) after the declared fields
//! 2. **Validate** names: non-empty, packable, unique ignoring case
//! 3. **Index** fields densely in declaration order
//! 4. **Allocate** one presence bit per field in 32-bit groups
//! 5. **Compile** a [`NameResolver`](sparse_resolve::NameResolver) over the names
//!
//! Any failure aborts the whole compilation; no partially built schema is
//! ever returned. A compiled schema is shared behind an `Arc` by every record
//! created from it.

mod compiler;
mod interface;
mod presence;
mod schema;

pub use compiler::{compile_schema, SchemaCompiler};
pub use interface::Interface;
pub use presence::{PresenceAllocator, PresenceGroup, PresenceLayout, PresenceSlot};
pub use schema::{FieldDescriptor, Schema};

pub use sparse_resolve::{DispatchOptions, Resolution};
