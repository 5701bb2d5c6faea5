use crate::{
    node::Node,
    reducer::{Reduction, reduce_depth_bounded, reduce_fork_join, reduce_sequential},
};
use core::num::NonZeroUsize;
use derive_more::Display;
use std::time::{Duration, Instant};
use tracing::info;

/// Number of processors available to the process, or `1` if it cannot be
/// determined. Used as the default budget and parallelism.
#[must_use]
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Selects one of the reducers together with its concurrency parameter.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Post-order traversal on the calling thread.
    #[display("Sequential")]
    Sequential,
    /// Recursive fork-join splitting `budget` between subtrees.
    #[display("ForkJoin({budget})")]
    ForkJoin {
        /// Upper bound on concurrently live tasks.
        budget: usize,
    },
    /// Fork-join limited to the top `floor(log2(parallelism))` levels.
    #[display("DepthBounded({parallelism})")]
    DepthBounded {
        /// Requested parallelism the fork depth is derived from.
        parallelism: usize,
    },
}

impl Strategy {
    /// Fork-join with a budget of [`default_parallelism`].
    #[must_use]
    pub fn fork_join_default() -> Self {
        Self::ForkJoin {
            budget: default_parallelism(),
        }
    }

    /// Depth-bounded with a parallelism of [`default_parallelism`].
    #[must_use]
    pub fn depth_bounded_default() -> Self {
        Self::DepthBounded {
            parallelism: default_parallelism(),
        }
    }

    /// Populate every aggregate under `root` with this strategy.
    pub fn run(self, root: &mut Node) -> Reduction {
        match self {
            Self::Sequential => reduce_sequential(root),
            Self::ForkJoin { budget } => reduce_fork_join(root, budget),
            Self::DepthBounded { parallelism } => reduce_depth_bounded(root, parallelism),
        }
    }

    /// [`Strategy::run`], measuring wall-clock time.
    pub fn run_timed(self, root: &mut Node) -> (Reduction, Duration) {
        let start = Instant::now();
        let reduction = self.run(root);
        let elapsed = start.elapsed();
        info!(strategy = %self, ?elapsed, total = reduction.total, "reduction timed");
        (reduction, elapsed)
    }
}
