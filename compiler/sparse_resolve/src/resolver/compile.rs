//! Lowering a radix tree into dispatch steps.
//!
//! Steps are emitted post-order: a node's descendants are compiled before the
//! step that dispatches to it, which keeps each `Scan`'s arms contiguous.

use smallvec::SmallVec;

use super::{Arm, DispatchOptions, NameResolver, Step, StepId};
use crate::stack::ensure_sufficient_stack;
use crate::tree::{NodeId, RadixTree};

struct Builder<'t> {
    tree: &'t RadixTree,
    linear_limit: usize,
    steps: Vec<Step>,
    arms: Vec<Arm>,
}

pub(super) fn compile(tree: &RadixTree, options: DispatchOptions) -> NameResolver {
    let mut builder = Builder {
        tree,
        linear_limit: options.linear_limit.max(2),
        steps: Vec::new(),
        arms: Vec::new(),
    };
    let entry = builder.dispatch(tree.root().children());
    NameResolver {
        steps: builder.steps,
        arms: builder.arms,
        entry,
        depth: tree.max_depth(),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "steps and arms are bounded by the tree's node count"
)]
fn id(len: usize) -> u32 {
    len as u32
}

impl Builder<'_> {
    /// Dispatch over `children`, which are sorted by key.
    ///
    /// Recursion depth tracks the longest name in chunks.
    fn dispatch(&mut self, children: &[NodeId]) -> StepId {
        ensure_sufficient_stack(|| {
            if children.len() < self.linear_limit {
                self.scan(children)
            } else {
                self.split(children)
            }
        })
    }

    fn scan(&mut self, children: &[NodeId]) -> StepId {
        let tree = self.tree;
        let arms: SmallVec<[Arm; 4]> = children
            .iter()
            .map(|&child| {
                let node = tree.node(child);
                let next = if node.children().is_empty() {
                    None
                } else {
                    Some(self.dispatch(node.children()))
                };
                Arm {
                    key: node.key(),
                    field: node.field(),
                    next,
                }
            })
            .collect();

        let start = id(self.arms.len());
        self.arms.extend(arms);
        let end = id(self.arms.len());
        self.push(Step::Scan { start, end })
    }

    fn split(&mut self, children: &[NodeId]) -> StepId {
        let mid = children.len() / 2;
        let pivot = self.tree.node(children[mid]).key();
        let lower = self.dispatch(&children[..mid]);
        let upper = self.dispatch(&children[mid..]);
        self.push(Step::Split {
            pivot,
            lower,
            upper,
        })
    }

    fn push(&mut self, step: Step) -> StepId {
        let step_id = StepId(id(self.steps.len()));
        self.steps.push(step);
        step_id
    }
}
