use std::iter::FusedIterator;

use crate::arena::{linked, Nodes};
use crate::node::Node;
use crate::queue::Queue;
use crate::slab::Ptr;

#[derive(Debug, Clone)]
pub(crate) struct LevelorderWalk {
    queue: Queue<Ptr>,
}

impl LevelorderWalk {
    pub fn new(root: Option<Ptr>) -> Self {
        let mut queue = Queue::new();
        queue.extend(root);
        Self {queue}
    }

    pub fn next<T, S>(&mut self, nodes: &Nodes<T, S>) -> Option<Ptr> {
        let ptr = self.queue.pop()?;
        let node = linked(nodes, ptr);
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(ptr)
    }
}

/// Iterator over a subtree in level-order (breadth first), left to right within each level
pub struct IterLevelorder<'a, T, S = ()> {
    nodes: &'a Nodes<T, S>,
    walk: LevelorderWalk,
}

impl<'a, T, S> IterLevelorder<'a, T, S> {
    pub(crate) fn new(nodes: &'a Nodes<T, S>, root: Ptr) -> Self {
        Self {
            nodes,
            walk: LevelorderWalk::new(Some(root)),
        }
    }
}

impl<'a, T, S> Iterator for IterLevelorder<'a, T, S> {
    type Item = Node<'a, T, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.walk.next(self.nodes)?;
        Some(Node::attach(self.nodes, ptr))
    }
}

impl<'a, T, S> FusedIterator for IterLevelorder<'a, T, S> {}
