//! Name resolution without hashing.
//!
//! Field names are cut into chunks of up to eight characters, each packed
//! big-endian into a `u64` (one character per byte). A [`RadixTree`] keyed on
//! those chunks is built once per schema and then compiled into a
//! [`NameResolver`]: a flat table of dispatch steps that maps any input string
//! to a [`FieldIndex`](sparse_ir::FieldIndex) or to
//! [`Resolution::Unresolved`].
//!
//! # Cost
//!
//! Resolving a name of length `n` extracts `ceil(n / 8)` chunks. At each tree
//! level, a node with fewer than four children is scanned linearly; wider
//! nodes are split on their median key, so a level with `k` children costs
//! `O(log k)` comparisons. Resolution never allocates.
//!
//! # Case Sensitivity
//!
//! Matching is exact, byte for byte. Schemas reject names that differ only by
//! case, but the resolver does not fold case: `"age"` does not resolve to a
//! field declared as `"Age"`.

mod chunk;
mod resolver;
mod stack;
mod tree;

pub use chunk::{next_chunk, pack, Unpackable, CHUNK_WIDTH};
pub use resolver::{DispatchOptions, NameResolver, Resolution};
pub use tree::{NodeId, RadixNode, RadixTree};
