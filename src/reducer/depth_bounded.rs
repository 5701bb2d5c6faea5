use crate::{
    node::Node,
    reducer::{Reduction, merge_children},
    utils::floor_log2,
};
use tracing::{debug, trace};

/// Number of nesting levels at which the depth-bounded reducer may fork:
/// `floor(log2(parallelism))`, or `0` when `parallelism <= 1`.
#[must_use]
pub fn max_active_levels(parallelism: usize) -> u32 {
    floor_log2(parallelism)
}

/// Reduce the tree forking only above a fixed nesting depth.
///
/// Nodes at depth `d < max_active_levels(parallelism)` (the root has depth 0)
/// reduce their two subtrees concurrently; everything deeper is reduced
/// sequentially. At most `2^levels - 1` nodes fork, so no more than
/// `2^levels <= parallelism` tasks are ever live.
pub fn reduce_depth_bounded(root: &mut Node, parallelism: usize) -> Reduction {
    let levels = max_active_levels(parallelism);
    let reduction = depth_bounded(root, 0, levels);
    debug!(
        parallelism,
        levels,
        total = reduction.total,
        forks = reduction.forks,
        "depth-bounded reduction finished"
    );
    reduction
}

fn depth_bounded(node: &mut Node, depth: u32, levels: u32) -> Reduction {
    if depth >= levels {
        return Reduction::sequential(node);
    }
    trace!(depth, levels, "depth-bounded fork");
    let depth = depth + 1;
    merge_children(
        node,
        move |left| depth_bounded(left, depth, levels),
        move |right| depth_bounded(right, depth, levels),
    )
}
