use crate::node::Node;
use rand::Rng;
use thiserror::Error;
use tracing::info;

/// Smallest value assigned to a generated node.
pub const MIN_NODE_VALUE: i32 = 1;
/// Largest value assigned to a generated node.
pub const MAX_NODE_VALUE: i32 = 100;
/// Deepest tree [`perfect_tree`] agrees to build.
pub const MAX_DEPTH: usize = 32;

/// Error returned when the requested tree shape cannot be generated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateError {
    /// A tree has at least one level.
    #[error("tree depth must be at least 1, got {0}")]
    InvalidDepth(usize),
    /// The tree would not fit in memory.
    #[error("tree depth {depth} exceeds the maximum of {max}")]
    TooDeep {
        /// Requested depth.
        depth: usize,
        /// Maximum supported depth.
        max: usize,
    },
}

/// Build a perfect binary tree with `depth` levels (`2^depth - 1` nodes) and
/// values drawn uniformly from `MIN_NODE_VALUE..=MAX_NODE_VALUE`.
///
/// # Errors
/// If `depth` is zero or greater than [`MAX_DEPTH`].
pub fn perfect_tree<R: Rng + ?Sized>(depth: usize, rng: &mut R) -> Result<Node, GenerateError> {
    if depth < 1 {
        return Err(GenerateError::InvalidDepth(depth));
    }
    if depth > MAX_DEPTH {
        return Err(GenerateError::TooDeep {
            depth,
            max: MAX_DEPTH,
        });
    }

    // Deepest level first; every level above adopts consecutive pairs.
    let mut level: Vec<Node> = (0..1usize << (depth - 1))
        .map(|_| Node::new(rng.gen_range(MIN_NODE_VALUE..=MAX_NODE_VALUE)))
        .collect();
    while level.len() > 1 {
        let mut below = level.into_iter();
        level = core::iter::from_fn(|| {
            let left = below.next()?;
            let right = below.next()?;
            let value = rng.gen_range(MIN_NODE_VALUE..=MAX_NODE_VALUE);
            Some(Node::with_children(value, Some(left), Some(right)))
        })
        .collect();
    }
    let root = level.pop().expect("perfect_tree: [1]");
    info!(depth, nodes = (1u64 << depth) - 1, "tree generated");
    Ok(root)
}

/// [`perfect_tree`] seeded from the thread-local RNG.
///
/// # Errors
/// Same as [`perfect_tree`].
pub fn random_tree(depth: usize) -> Result<Node, GenerateError> {
    perfect_tree(depth, &mut rand::thread_rng())
}
