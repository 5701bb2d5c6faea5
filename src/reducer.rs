mod depth_bounded;
mod fork_join;
mod sequential;

pub use crate::reducer::{
    depth_bounded::{max_active_levels, reduce_depth_bounded},
    fork_join::{reduce_fork_join, split_budget},
    sequential::reduce_sequential,
};
use crate::{node::Node, sync::join};

/// Summary of one reduction run over a subtree.
///
/// The aggregates themselves live on the nodes; this only reports what the
/// caller could otherwise read off the root plus how much forking happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reduction {
    /// Sum of every value in the subtree (`root.aggregate() + root.value()`).
    pub total: i64,
    /// Number of nodes at which both children were reduced by concurrent
    /// tasks.
    pub forks: usize,
}

impl Reduction {
    /// Reduce the whole subtree on the current task.
    fn sequential(node: &mut Node) -> Self {
        Self {
            total: sequential::sum_subtree(node),
            forks: 0,
        }
    }
}

/// Reduce the children of `node` and publish its aggregate.
///
/// When both children are present, each subtree is moved into its own task,
/// the two tasks are joined and the subtrees are reattached. A lone child is
/// reduced by the current task, which would otherwise only wait for it.
/// An absent child contributes zero and costs nothing.
///
/// `node.aggregate` is written strictly after both child results are
/// available, and only by the task that owns `node`.
fn merge_children<L, R>(node: &mut Node, reduce_left: L, reduce_right: R) -> Reduction
where
    L: FnOnce(&mut Node) -> Reduction + Send + 'static,
    R: FnOnce(&mut Node) -> Reduction + Send + 'static,
{
    let (lhs, rhs, forked) = match (node.left.take(), node.right.take()) {
        (Some(mut left), Some(mut right)) => {
            let ((left, lhs), (right, rhs)) = join(
                move || {
                    let reduction = reduce_left(&mut *left);
                    (left, reduction)
                },
                move || {
                    let reduction = reduce_right(&mut *right);
                    (right, reduction)
                },
            );
            node.left = Some(left);
            node.right = Some(right);
            (lhs, rhs, 1)
        }
        (left, right) => {
            node.left = left;
            node.right = right;
            let lhs = node
                .left
                .as_deref_mut()
                .map_or_else(Reduction::default, reduce_left);
            let rhs = node
                .right
                .as_deref_mut()
                .map_or_else(Reduction::default, reduce_right);
            (lhs, rhs, 0)
        }
    };
    node.aggregate = lhs.total + rhs.total;
    Reduction {
        total: node.total(),
        forks: lhs.forks + rhs.forks + forked,
    }
}
