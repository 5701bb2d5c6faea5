use crate::node::Node;
use core::fmt::{self, Display, Formatter};

/// Renders a tree one node per line, children indented under their parent.
///
/// ```text
/// 1, 14
/// +--- 2, 9
/// |    +--- 4, 0
/// |    +--- 5, 0
/// +--- 3, 0
/// ```
///
/// With `show_aggregate` unset only the values are printed.
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a> {
    root: &'a Node,
    show_aggregate: bool,
}

impl<'a> Pretty<'a> {
    /// Wrap `root` for display.
    #[must_use]
    pub fn new(root: &'a Node, show_aggregate: bool) -> Self {
        Self {
            root,
            show_aggregate,
        }
    }

    fn write_label(self, f: &mut Formatter<'_>, node: &Node) -> fmt::Result {
        if self.show_aggregate {
            writeln!(f, "{}, {}", node.value(), node.aggregate())
        } else {
            writeln!(f, "{}", node.value())
        }
    }

    fn write_children(
        self,
        f: &mut Formatter<'_>,
        node: &Node,
        prefix: &mut String,
    ) -> fmt::Result {
        let count = node.children().count();
        for (idx, child) in node.children().enumerate() {
            let is_last = idx + 1 == count;
            write!(f, "{prefix}+--- ")?;
            self.write_label(f, child)?;
            let len = prefix.len();
            prefix.push_str(if is_last { "     " } else { "|    " });
            self.write_children(f, child, prefix)?;
            prefix.truncate(len);
        }
        Ok(())
    }
}

impl Display for Pretty<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_label(f, self.root)?;
        self.write_children(f, self.root, &mut String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::Pretty;
    use crate::node::Node;

    fn sample() -> Node {
        Node::with_children(
            1,
            Some(Node::with_children(2, Some(Node::new(4)), Some(Node::new(5)))),
            Some(Node::with_children(3, None, Some(Node::new(6)))),
        )
    }

    #[test]
    fn values_only() {
        let root = sample();
        let expected = "\
1
+--- 2
|    +--- 4
|    +--- 5
+--- 3
     +--- 6
";
        assert_eq!(Pretty::new(&root, false).to_string(), expected);
    }

    #[test]
    fn with_aggregates() {
        let mut root = sample();
        root.set_left(Node::new(7)).set_left(Node::new(8));
        root.aggregate = 24;
        root.left.as_deref_mut().unwrap().aggregate = 8;
        root.right.as_deref_mut().unwrap().aggregate = 6;
        let expected = "\
1, 24
+--- 7, 8
|    +--- 8, 0
+--- 3, 6
     +--- 6, 0
";
        assert_eq!(Pretty::new(&root, true).to_string(), expected);
    }

    #[test]
    fn lone_root() {
        assert_eq!(Pretty::new(&Node::new(42), true).to_string(), "42, 0\n");
    }
}
