use std::iter::FusedIterator;

use crate::arena::{linked, Nodes};
use crate::node::Node;
use crate::slab::Ptr;

#[derive(Debug, Clone)]
pub(crate) struct PreorderWalk {
    stack: Vec<Ptr>,
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl PreorderWalk {
    pub fn new(root: Option<Ptr>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }

    pub fn next<T, S>(&mut self, nodes: &Nodes<T, S>) -> Option<Ptr> {
        let ptr = self.stack.pop()?;
        let node = linked(nodes, ptr);
        // Right goes first so that left comes off the stack first
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(ptr)
    }
}

/// Iterator over a subtree in pre-order: node, left subtree, right subtree
pub struct IterPreorder<'a, T, S = ()> {
    nodes: &'a Nodes<T, S>,
    walk: PreorderWalk,
}

impl<'a, T, S> IterPreorder<'a, T, S> {
    pub(crate) fn new(nodes: &'a Nodes<T, S>, root: Ptr) -> Self {
        Self {
            nodes,
            walk: PreorderWalk::new(Some(root)),
        }
    }
}

impl<'a, T, S> Iterator for IterPreorder<'a, T, S> {
    type Item = Node<'a, T, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.walk.next(self.nodes)?;
        Some(Node::attach(self.nodes, ptr))
    }
}

impl<'a, T, S> FusedIterator for IterPreorder<'a, T, S> {}
