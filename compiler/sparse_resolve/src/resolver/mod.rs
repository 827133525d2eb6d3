//! Compiled name resolver.
//!
//! A [`NameResolver`] is a [`RadixTree`] lowered into a flat program of
//! dispatch steps, so resolution is a tight loop over two arrays instead of a
//! pointer-chasing tree walk.
//!
//! # Steps
//!
//! - **Scan**: compare the current chunk against a contiguous run of arms, in
//!   key order. On an equal key, report the arm's field if the input is fully
//!   consumed; otherwise extract the next chunk and continue at the arm's
//!   successor step.
//! - **Split**: one `chunk < pivot` comparison choosing between two steps.
//!
//! Nodes with fewer than [`DispatchOptions::linear_limit`] children become a
//! `Scan`; wider nodes become a tree of `Split`s over their median keys with
//! `Scan`s at the leaves.

mod compile;

use sparse_ir::FieldIndex;

use crate::chunk::next_chunk;
use crate::tree::RadixTree;

/// Outcome of resolving a name.
///
/// `Unresolved` is an ordinary answer, not an error: probing for optional
/// fields is expected to miss.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Resolution {
    Field(FieldIndex),
    Unresolved,
}

impl Resolution {
    #[inline]
    pub fn field(self) -> Option<FieldIndex> {
        match self {
            Resolution::Field(field) => Some(field),
            Resolution::Unresolved => None,
        }
    }

    #[inline]
    pub fn is_resolved(self) -> bool {
        matches!(self, Resolution::Field(_))
    }
}

impl From<Resolution> for Option<FieldIndex> {
    fn from(resolution: Resolution) -> Self {
        resolution.field()
    }
}

/// Shape controls for resolver compilation.
///
/// These change how the dispatch program is laid out, never what it answers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Nodes with fewer children than this are scanned linearly; wider nodes
    /// are split on their median key. Values below 2 are treated as 2.
    pub linear_limit: usize,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        DispatchOptions { linear_limit: 4 }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(transparent)]
struct StepId(u32);

impl StepId {
    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    /// Arms `start..end`, checked in order.
    Scan { start: u32, end: u32 },
    /// `chunk < pivot` goes to `lower`, everything else to `upper`.
    Split {
        pivot: u64,
        lower: StepId,
        upper: StepId,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Arm {
    key: u64,
    /// Set when a name ends at this arm's node.
    field: Option<FieldIndex>,
    /// Dispatch over the node's children, if it has any.
    next: Option<StepId>,
}

/// Decision procedure mapping names to field indices.
#[derive(Clone, Debug)]
pub struct NameResolver {
    steps: Vec<Step>,
    arms: Vec<Arm>,
    entry: StepId,
    depth: usize,
}

impl NameResolver {
    /// Compile `tree` with default options.
    pub fn compile(tree: &RadixTree) -> Self {
        Self::compile_with(tree, DispatchOptions::default())
    }

    /// Compile `tree` into a dispatch program.
    pub fn compile_with(tree: &RadixTree, options: DispatchOptions) -> Self {
        let resolver = compile::compile(tree, options);
        tracing::debug!(
            nodes = tree.node_count(),
            steps = resolver.steps.len(),
            arms = resolver.arms.len(),
            depth = resolver.depth,
            linear_limit = options.linear_limit,
            "compiled name resolver"
        );
        resolver
    }

    /// Resolve `name` to its field, or `Unresolved`.
    ///
    /// Inputs containing characters that no field name can contain (NUL or
    /// anything above U+00FF) are unresolved.
    pub fn resolve(&self, name: &str) -> Resolution {
        let mut pos = 0;
        let Ok(mut chunk) = next_chunk(name, &mut pos) else {
            return Resolution::Unresolved;
        };
        let mut step = self.entry;
        loop {
            match self.steps[step.index()] {
                Step::Split {
                    pivot,
                    lower,
                    upper,
                } => {
                    step = if chunk < pivot { lower } else { upper };
                }
                Step::Scan { start, end } => {
                    let arms = &self.arms[start as usize..end as usize];
                    let Some(arm) = arms.iter().find(|arm| arm.key == chunk) else {
                        return Resolution::Unresolved;
                    };
                    if let Some(field) = arm.field {
                        // Only a fully consumed input may match; "Id" must not
                        // answer for "Identity".
                        if pos == name.len() {
                            return Resolution::Field(field);
                        }
                    }
                    let Some(next) = arm.next else {
                        return Resolution::Unresolved;
                    };
                    chunk = match next_chunk(name, &mut pos) {
                        Ok(chunk) => chunk,
                        Err(_) => return Resolution::Unresolved,
                    };
                    step = next;
                }
            }
        }
    }

    /// Number of chunk levels: `ceil(longest name / 8)`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of dispatch steps in the compiled program.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
