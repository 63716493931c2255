use std::collections::VecDeque;

/// A first-in first-out queue
///
/// Used by level-order traversal to hold the nodes whose children have not been visited yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::default(),
        }
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue that can hold at least `capacity` items without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the number of items in the queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an item to the back of the queue
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the earliest pushed item still in the queue and returns it
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the item that the next call to `pop` will remove
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}
