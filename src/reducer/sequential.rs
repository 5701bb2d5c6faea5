use crate::{node::Node, reducer::Reduction};
use tracing::debug;

/// Reduce the tree on the calling thread with a post-order traversal.
///
/// Every aggregate in the tree is overwritten. This is the reference result
/// the parallel reducers must reproduce, and the routine they fall back to
/// once their budget or depth allowance runs out.
///
/// Recursion depth equals tree depth; see [`Node`] for the stack limit.
pub fn reduce_sequential(root: &mut Node) -> Reduction {
    let reduction = Reduction::sequential(root);
    debug!(total = reduction.total, "sequential reduction finished");
    reduction
}

/// Returns the subtree total.
pub(super) fn sum_subtree(node: &mut Node) -> i64 {
    let lhs = node.left.as_deref_mut().map_or(0, sum_subtree);
    let rhs = node.right.as_deref_mut().map_or(0, sum_subtree);
    node.aggregate = lhs + rhs;
    node.total()
}
