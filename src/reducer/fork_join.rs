use crate::{
    node::Node,
    reducer::{Reduction, merge_children},
    utils::SplitAtHalf,
};
use tracing::{debug, trace};

/// Split a fork-join budget between the left and the right subtree.
///
/// The halves always sum to `budget`; the right one takes the remainder and
/// is never smaller than the left one.
#[must_use]
pub fn split_budget(budget: usize) -> (usize, usize) {
    budget.split_at_half()
}

/// Reduce the tree by forking a task per subtree while `budget` allows it.
///
/// A budget of `0` or `1` reduces sequentially. Otherwise the budget is split
/// with [`split_budget`] and each child subtree is reduced concurrently with
/// its share, recursively, so the number of live tasks never exceeds
/// `budget`.
pub fn reduce_fork_join(root: &mut Node, budget: usize) -> Reduction {
    let reduction = fork_join(root, budget);
    debug!(
        budget,
        total = reduction.total,
        forks = reduction.forks,
        "fork-join reduction finished"
    );
    reduction
}

fn fork_join(node: &mut Node, budget: usize) -> Reduction {
    if budget <= 1 {
        return Reduction::sequential(node);
    }
    let (left_budget, right_budget) = split_budget(budget);
    trace!(budget, left_budget, right_budget, "fork-join split");
    merge_children(
        node,
        move |left| fork_join(left, left_budget),
        move |right| fork_join(right, right_budget),
    )
}
