use std::iter::FusedIterator;

use crate::arena::{linked, Nodes};
use crate::node::Node;
use crate::slab::Ptr;

#[derive(Debug, Clone)]
pub(crate) struct PostorderWalk {
    stack: Vec<Ptr>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl PostorderWalk {
    pub fn new<T, S>(nodes: &Nodes<T, S>, root: Option<Ptr>) -> Self {
        let mut walk = Self {stack: Vec::new()};
        walk.descend(nodes, root);
        walk
    }

    /// Walks down the left links from `current`, leaving each node on the stack above its right
    /// child
    fn descend<T, S>(&mut self, nodes: &Nodes<T, S>, mut current: Option<Ptr>) {
        while let Some(ptr) = current {
            let node = linked(nodes, ptr);
            self.stack.extend(node.right);
            self.stack.push(ptr);
            current = node.left;
        }
    }

    /// Returns the next node in post-order
    ///
    /// A node is only read while it is on the stack, and it leaves the stack for good when it is
    /// returned. Callers may release each returned node before asking for the next one.
    pub fn next<T, S>(&mut self, nodes: &Nodes<T, S>) -> Option<Ptr> {
        while let Some(ptr) = self.stack.pop() {
            match linked(nodes, ptr).right {
                // The right subtree is still waiting on the stack, so it goes first
                Some(right) if self.stack.last() == Some(&right) => {
                    self.stack.pop();
                    self.stack.push(ptr);
                    self.descend(nodes, Some(right));
                },

                _ => return Some(ptr),
            }
        }

        None
    }
}

/// Iterator over a subtree in post-order: left subtree, right subtree, node
pub struct IterPostorder<'a, T, S = ()> {
    nodes: &'a Nodes<T, S>,
    walk: PostorderWalk,
}

impl<'a, T, S> IterPostorder<'a, T, S> {
    pub(crate) fn new(nodes: &'a Nodes<T, S>, root: Ptr) -> Self {
        Self {
            nodes,
            walk: PostorderWalk::new(nodes, Some(root)),
        }
    }
}

impl<'a, T, S> Iterator for IterPostorder<'a, T, S> {
    type Item = Node<'a, T, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.walk.next(self.nodes)?;
        Some(Node::attach(self.nodes, ptr))
    }
}

impl<'a, T, S> FusedIterator for IterPostorder<'a, T, S> {}
