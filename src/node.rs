/// A vertex of a rooted binary tree.
///
/// Every node exclusively owns its children, so disjoint subtrees can be
/// handed to different tasks without any synchronization. The `aggregate`
/// field holds the sum of all descendant values (the node's own value is
/// excluded) and is only written by the reducers in [`crate::reducer`].
///
/// Traversals (`len`, `depth`, `clear`, `Clone`, `PartialEq` and the reducers)
/// recurse once per level, so a subtree deeper than the thread's stack allows
/// (a chain of a few hundred thousand nodes on a default stack) overflows it.
/// Dropping is iterative and works for any depth.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: i32,
    pub(crate) aggregate: i64,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    /// Create a childless node with a zero aggregate.
    pub fn new(value: i32) -> Self {
        Self {
            value,
            aggregate: 0,
            left: None,
            right: None,
        }
    }

    /// Create a node adopting the given children.
    pub fn with_children(value: i32, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            value,
            aggregate: 0,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Attach `child` as the left child, dropping any previous one, and return
    /// a reference to the attached child.
    pub fn set_left(&mut self, child: Node) -> &mut Node {
        self.left.insert(Box::new(child))
    }

    /// Attach `child` as the right child, dropping any previous one, and
    /// return a reference to the attached child.
    pub fn set_right(&mut self, child: Node) -> &mut Node {
        self.right.insert(Box::new(child))
    }

    /// The node's own value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Sum of all descendant values as of the last reduction.
    #[must_use]
    pub fn aggregate(&self) -> i64 {
        self.aggregate
    }

    /// `aggregate + value`: the sum of the whole subtree rooted here.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.aggregate + i64::from(self.value)
    }

    /// The left child, if any.
    #[must_use]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The right child, if any.
    #[must_use]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Mutable access to the left child.
    pub fn left_mut(&mut self) -> Option<&mut Node> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child.
    pub fn right_mut(&mut self) -> Option<&mut Node> {
        self.right.as_deref_mut()
    }

    /// Present children, left first.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.left().into_iter().chain(self.right())
    }

    /// Number of nodes in the subtree.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.children().map(Node::len).sum::<usize>()
    }

    /// Always `false`: a subtree contains at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of levels in the subtree; a lone node has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children().map(Node::depth).max().unwrap_or(0)
    }

    /// Sum of every value in the subtree, computed without touching any
    /// aggregate.
    #[must_use]
    pub fn value_sum(&self) -> i64 {
        i64::from(self.value) + self.children().map(Node::value_sum).sum::<i64>()
    }

    /// Reset the aggregate of every node in the subtree to zero.
    pub fn clear(&mut self) {
        self.aggregate = 0;
        if let Some(left) = self.left_mut() {
            left.clear();
        }
        if let Some(right) = self.right_mut() {
            right.clear();
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach descendants onto a worklist so no drop recurses.
        let mut pending: Vec<Box<Node>> = self
            .left
            .take()
            .into_iter()
            .chain(self.right.take())
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
