use std::collections::VecDeque;

/// A "simple" binary tree node that uses `Box` for its children, rather than arena allocating the
/// nodes
///
/// Has no parent links. Used to test the `bintree` crate: any tree built in a `NodeArena` can be
/// built here with the same shape and the traversal orders compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Sets the left child and returns it
    ///
    /// The slot MUST be empty
    pub fn insert_left(&mut self, value: T) -> &mut Self {
        assert!(self.left.is_none(), "left child already present");
        self.left.insert(Box::new(Self::new(value)))
    }

    /// Sets the right child and returns it
    ///
    /// The slot MUST be empty
    pub fn insert_right(&mut self, value: T) -> &mut Self {
        assert!(self.right.is_none(), "right child already present");
        self.right.insert(Box::new(Self::new(value)))
    }

    /// Returns the number of nodes in this subtree
    pub fn size(&self) -> usize {
        1 + self.left().map_or(0, Self::size) + self.right().map_or(0, Self::size)
    }
}

impl<T: Clone> Node<T> {
    pub fn preorder(&self) -> Vec<T> {
        let mut values = Vec::new();
        self.preorder_into(&mut values);
        values
    }

    fn preorder_into(&self, values: &mut Vec<T>) {
        values.push(self.value.clone());
        if let Some(left) = self.left() {
            left.preorder_into(values);
        }
        if let Some(right) = self.right() {
            right.preorder_into(values);
        }
    }

    pub fn inorder(&self) -> Vec<T> {
        let mut values = Vec::new();
        self.inorder_into(&mut values);
        values
    }

    fn inorder_into(&self, values: &mut Vec<T>) {
        if let Some(left) = self.left() {
            left.inorder_into(values);
        }
        values.push(self.value.clone());
        if let Some(right) = self.right() {
            right.inorder_into(values);
        }
    }

    pub fn postorder(&self) -> Vec<T> {
        let mut values = Vec::new();
        self.postorder_into(&mut values);
        values
    }

    fn postorder_into(&self, values: &mut Vec<T>) {
        if let Some(left) = self.left() {
            left.postorder_into(values);
        }
        if let Some(right) = self.right() {
            right.postorder_into(values);
        }
        values.push(self.value.clone());
    }

    pub fn levelorder(&self) -> Vec<T> {
        let mut values = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(self);
        while let Some(node) = queue.pop_front() {
            values.push(node.value.clone());
            queue.extend(node.left());
            queue.extend(node.right());
        }
        values
    }
}
