//! Radix tree keyed on packed name chunks.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. Children
//! are kept sorted by chunk key, which is the order the resolver compiler
//! partitions them in.

use smallvec::SmallVec;
use sparse_ir::{FieldError, FieldIndex, FieldResult};

use crate::chunk::pack;

/// Index of a node in its tree's arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node; it carries no key and is never terminal.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One level of a name path.
#[derive(Clone, Debug)]
pub struct RadixNode {
    key: u64,
    field: Option<FieldIndex>,
    children: SmallVec<[NodeId; 4]>,
}

impl RadixNode {
    fn new(key: u64) -> Self {
        RadixNode {
            key,
            field: None,
            children: SmallVec::new(),
        }
    }

    /// Packed chunk leading to this node from its parent.
    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Field whose name ends exactly at this node.
    #[inline]
    pub fn field(&self) -> Option<FieldIndex> {
        self.field
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.field.is_some()
    }

    /// Children, ascending by key.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Trie over packed 8-character chunks.
#[derive(Clone, Debug)]
pub struct RadixTree {
    nodes: Vec<RadixNode>,
    max_depth: usize,
}

impl RadixTree {
    pub fn new() -> Self {
        RadixTree {
            nodes: vec![RadixNode::new(0)],
            max_depth: 0,
        }
    }

    /// Build a tree from names, assigning indices in iteration order.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> FieldResult<Self> {
        let mut tree = RadixTree::new();
        for (i, name) in names.into_iter().enumerate() {
            let field = FieldIndex::try_from(i)
                .map_err(|_| FieldError::TooManyFields { count: i + 1 })?;
            tree.insert(name, field)?;
        }
        Ok(tree)
    }

    /// Add `name` as a path of chunk nodes ending in a terminal for `field`.
    ///
    /// The name is validated in full before any node is created, so a
    /// failed insert leaves the tree untouched.
    pub fn insert(&mut self, name: &str, field: FieldIndex) -> FieldResult<()> {
        if name.is_empty() {
            return Err(FieldError::EmptyFieldName);
        }
        let chunks = pack(name).map_err(|bad| FieldError::UnsupportedCharacter {
            name: name.to_owned(),
            ch: bad.ch,
            offset: bad.offset,
        })?;

        // Reject duplicates before creating any node.
        if let Some(existing) = self.find(&chunks) {
            if self.nodes[existing.index()].is_terminal() {
                return Err(FieldError::DuplicateField {
                    name: name.to_owned(),
                });
            }
        }

        let mut node = NodeId::ROOT;
        for &chunk in &chunks {
            node = self.child_or_insert(node, chunk);
        }
        self.nodes[node.index()].field = Some(field);
        self.max_depth = self.max_depth.max(chunks.len());
        Ok(())
    }

    fn find(&self, chunks: &[u64]) -> Option<NodeId> {
        let mut node = NodeId::ROOT;
        for &chunk in chunks {
            node = self.child(node, chunk)?;
        }
        Some(node)
    }

    fn child(&self, parent: NodeId, key: u64) -> Option<NodeId> {
        let children = &self.nodes[parent.index()].children;
        children
            .binary_search_by_key(&key, |c| self.nodes[c.index()].key)
            .ok()
            .map(|pos| children[pos])
    }

    fn child_or_insert(&mut self, parent: NodeId, key: u64) -> NodeId {
        let search = self.nodes[parent.index()]
            .children
            .binary_search_by_key(&key, |c| self.nodes[c.index()].key);
        match search {
            Ok(pos) => self.nodes[parent.index()].children[pos],
            Err(pos) => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "node count is bounded by the packed chunks of at most u32::MAX names"
                )]
                let id = NodeId(self.nodes.len() as u32);
                self.nodes.push(RadixNode::new(key));
                self.nodes[parent.index()].children.insert(pos, id);
                id
            }
        }
    }

    #[inline]
    pub fn root(&self) -> &RadixNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &RadixNode {
        &self.nodes[id.index()]
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Deepest terminal, in chunks: `ceil(longest name / 8)`.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Exact lookup by walking the tree directly, without compilation.
    pub fn get(&self, name: &str) -> Option<FieldIndex> {
        let chunks = pack(name).ok()?;
        self.find(&chunks).and_then(|id| self.node(id).field)
    }
}

impl Default for RadixTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap to fail loudly on unexpected errors"
)]
mod tests;
