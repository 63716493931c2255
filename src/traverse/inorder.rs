use std::iter::FusedIterator;

use crate::arena::{linked, Nodes};
use crate::node::Node;
use crate::slab::Ptr;

#[derive(Debug, Clone)]
pub(crate) struct InorderWalk {
    stack: Vec<Ptr>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl InorderWalk {
    pub fn new<T, S>(nodes: &Nodes<T, S>, root: Option<Ptr>) -> Self {
        let mut walk = Self {stack: Vec::new()};
        walk.push_left_edge(nodes, root);
        walk
    }

    /// Pushes `current` and every node on the path down its left links
    fn push_left_edge<T, S>(&mut self, nodes: &Nodes<T, S>, mut current: Option<Ptr>) {
        while let Some(ptr) = current {
            self.stack.push(ptr);
            current = linked(nodes, ptr).left;
        }
    }

    pub fn next<T, S>(&mut self, nodes: &Nodes<T, S>) -> Option<Ptr> {
        let ptr = self.stack.pop()?;
        self.push_left_edge(nodes, linked(nodes, ptr).right);
        Some(ptr)
    }
}

/// Iterator over a subtree in in-order: left subtree, node, right subtree
///
/// Unlike the successor-based `Cursor`, this never looks above the node it was started from.
pub struct IterInorder<'a, T, S = ()> {
    nodes: &'a Nodes<T, S>,
    walk: InorderWalk,
}

impl<'a, T, S> IterInorder<'a, T, S> {
    pub(crate) fn new(nodes: &'a Nodes<T, S>, root: Ptr) -> Self {
        Self {
            nodes,
            walk: InorderWalk::new(nodes, Some(root)),
        }
    }
}

impl<'a, T, S> Iterator for IterInorder<'a, T, S> {
    type Item = Node<'a, T, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.walk.next(self.nodes)?;
        Some(Node::attach(self.nodes, ptr))
    }
}

impl<'a, T, S> FusedIterator for IterInorder<'a, T, S> {}
