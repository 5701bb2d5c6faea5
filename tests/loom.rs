#![allow(missing_docs)]
#![cfg(feature = "loom")]

use tree_sum::{
    node::Node,
    reducer::{reduce_depth_bounded, reduce_fork_join},
};

#[test]
fn loom_fork_join_two_leaves_visible_after_join() {
    loom::model(|| {
        // Tree:
        //      R(1)
        //     /    \
        //   A(10)  B(100)
        // Budget 2 forks once at R; A and B are reduced on separate threads.
        // Expectation: R.aggregate = 110, total = 111.
        let mut root = Node::with_children(1, Some(Node::new(10)), Some(Node::new(100)));
        let reduction = reduce_fork_join(&mut root, 2);

        assert_eq!(reduction.total, 111);
        assert_eq!(reduction.forks, 1);
        assert_eq!(root.aggregate(), 110);
        assert_eq!(root.left().unwrap().value(), 10);
        assert_eq!(root.right().unwrap().value(), 100);
        assert_eq!(root.left().unwrap().aggregate(), 0);
        assert_eq!(root.right().unwrap().aggregate(), 0);
    });
}

#[test]
fn loom_depth_bounded_publishes_subtree_aggregates() {
    loom::model(|| {
        // Tree:
        //          R(1)
        //         /    \
        //      A(2)     B(4)
        //      /  \       \
        //   C(8) D(16)    E(32)
        // Parallelism 2 => one active level: R forks, A and B reduce their
        // subtrees sequentially on their own threads.
        // Expectations: A = 24, B = 32, R = 62, total = 63.
        let mut root = Node::with_children(
            1,
            Some(Node::with_children(2, Some(Node::new(8)), Some(Node::new(16)))),
            Some(Node::with_children(4, None, Some(Node::new(32)))),
        );
        let reduction = reduce_depth_bounded(&mut root, 2);

        assert_eq!(reduction.total, 63);
        assert_eq!(reduction.forks, 1);
        assert_eq!(root.aggregate(), 62);
        assert_eq!(root.left().unwrap().aggregate(), 24);
        assert_eq!(root.right().unwrap().aggregate(), 32);
        assert_eq!(root.len(), 6);
    });
}

#[test]
fn loom_lone_child_is_not_spawned() {
    loom::model(|| {
        // Tree:
        //   R(5)
        //   /
        // A(3)
        // No thread is spawned for the absent right child, nor for A alone.
        let mut root = Node::with_children(5, Some(Node::new(3)), None);
        let reduction = reduce_fork_join(&mut root, 4);

        assert_eq!(reduction.total, 8);
        assert_eq!(reduction.forks, 0);
        assert_eq!(root.aggregate(), 3);
        assert!(root.right().is_none());
    });
}
