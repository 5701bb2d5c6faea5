//! Descendant sums over binary trees with interchangeable parallel reducers.
//!
//! Every [`Node`](node::Node) carries an `aggregate`: the sum of the values of
//! all its descendants. This crate computes those aggregates for a whole tree
//! with one of three reducers:
//! - `reduce_sequential`: post-order traversal on the calling thread. It is
//!   the reference result and the fallback of the other two.
//! - `reduce_fork_join`: recursively forks one task per subtree while a
//!   caller-supplied budget lasts, halving the budget at each fork.
//! - `reduce_depth_bounded`: forks only in the top `floor(log2(parallelism))`
//!   levels and reduces everything below sequentially.
//!
//! Subtrees are exclusively owned by their parent. When a reducer forks, it
//! moves each child subtree into its own task and reattaches both after the
//! join, so concurrent branches never share mutable state and no locks,
//! atomics or `unsafe` are involved. A node's aggregate is written only after
//! both of its children's results are available.
//!
//! Key modules:
//! - `node`: the tree itself.
//! - `reducer`: the three reducers and their fork/merge protocol.
//! - `config`: the [`Strategy`](config::Strategy) selector and default
//!   parallelism.
//! - `generate` and `printer`: random perfect trees and a text rendering,
//!   for experiments and debugging.
//!
//! Quick start (not run as a doctest: under the `loom` feature forking is only
//! possible inside `loom::model`; `tests/reduce.rs` runs the same steps):
//! ```no_run
//! use tree_sum::{node::Node, reducer::reduce_fork_join};
//!
//! let mut root = Node::with_children(1, Some(Node::new(2)), Some(Node::new(3)));
//! let reduction = reduce_fork_join(&mut root, 4);
//! assert_eq!(root.aggregate(), 5);
//! assert_eq!(reduction.total, 6);
//! ```
//!
//! With the `loom` feature enabled the fork primitive is backed by loom
//! threads, so the fork/join protocol can be model-checked.

/// Strategy selection, default parallelism and the timing wrapper.
pub mod config;
/// Random perfect binary trees.
pub mod generate;
/// The tree data type.
///
/// Nodes own their children exclusively; the aggregate field is written only
/// by reducers.
pub mod node;
/// Text rendering of a tree with or without aggregates.
pub mod printer;
/// The sequential, fork-join and depth-bounded reducers.
///
/// All three overwrite every aggregate in the tree they are given and agree
/// on the result for any tree and any concurrency parameter.
pub mod reducer;
mod sync;
mod utils;
