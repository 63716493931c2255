use std::fmt;
use std::ptr;
use std::iter::FusedIterator;

use crate::arena::{linked, linked_mut, Nodes};
use crate::node::Node;
use crate::slab::Ptr;

/// Returns the first node in in-order of the subtree rooted at `ptr`
pub(crate) fn leftmost<T, S>(nodes: &Nodes<T, S>, mut ptr: Ptr) -> Ptr {
    while let Some(left) = linked(nodes, ptr).left {
        ptr = left;
    }
    ptr
}

/// Returns the in-order successor of `ptr`, or `None` if `ptr` is the last node of its tree
///
/// Shared by `Node`, `NodeMut` and both cursor types.
pub(crate) fn successor<T, S>(nodes: &Nodes<T, S>, ptr: Ptr) -> Option<Ptr> {
    if let Some(right) = linked(nodes, ptr).right {
        return Some(leftmost(nodes, right));
    }

    // Climb past every ancestor whose right subtree we are in. The first ancestor we reach from
    // its left side is next. Running out of ancestors means this was the last node.
    let mut current = ptr;
    loop {
        let parent = linked(nodes, current).parent?;
        if linked(nodes, parent).right != Some(current) {
            return Some(parent);
        }
        current = parent;
    }
}

/// A read-only cursor that walks a tree in in-order, starting from any node
///
/// The cursor either points at a node or is at the end. Advancing uses the in-order successor, so
/// a cursor started below the root keeps going past the end of its starting subtree and finishes
/// at the last node of the whole tree.
///
/// `Cursor` is also an iterator over the values it passes over.
///
/// # Examples
///
/// ```
/// use bintree::NodeArena;
///
/// let mut arena = NodeArena::new();
/// let root = arena.insert_root(2);
/// let mut node = arena.node_mut(root).unwrap();
/// node.insert_left_child(1).unwrap();
/// node.insert_right_child(3).unwrap();
///
/// let first = arena.node(root).unwrap().leftmost().id();
/// let mut cursor = arena.cursor(first);
/// assert_eq!(cursor.value(), &1);
/// cursor.move_next();
/// assert_eq!(cursor.value(), &2);
/// assert_eq!(cursor.collect::<Vec<_>>(), vec![&2, &3]);
/// ```
pub struct Cursor<'a, T, S = ()> {
    nodes: &'a Nodes<T, S>,
    current: Option<Ptr>,
}

impl<'a, T, S> Clone for Cursor<'a, T, S> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
        }
    }
}

impl<'a, T: fmt::Debug, S> fmt::Debug for Cursor<'a, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(&self.get())
            .finish()
    }
}

impl<'a, T, S> PartialEq for Cursor<'a, T, S> {
    fn eq(&self, other: &Self) -> bool {
        same_position((self.nodes, self.current), (other.nodes, other.current))
    }
}

impl<'a, T, S> Eq for Cursor<'a, T, S> {}

/// Two positions are the same if they name the same node of the same arena, or are both at the
/// end
fn same_position<T, S>(a: (&Nodes<T, S>, Option<Ptr>), b: (&Nodes<T, S>, Option<Ptr>)) -> bool {
    match (a.1, b.1) {
        (None, None) => true,
        (Some(a_ptr), Some(b_ptr)) => ptr::eq(a.0, b.0) && a_ptr == b_ptr,
        _ => false,
    }
}

impl<'a, T, S> Cursor<'a, T, S> {
    pub(crate) fn new(nodes: &'a Nodes<T, S>, current: Option<Ptr>) -> Self {
        Self {nodes, current}
    }

    /// Returns true if the cursor has moved past the last node
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the node the cursor points at, or `None` at the end
    pub fn node(&self) -> Option<Node<'a, T, S>> {
        self.current.map(|ptr| Node::attach(self.nodes, ptr))
    }

    /// Returns the value of the node the cursor points at, or `None` at the end
    pub fn get(&self) -> Option<&'a T> {
        self.current.map(|ptr| &linked(self.nodes, ptr).value)
    }

    /// Returns the value of the node the cursor points at
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end. Use `get` to check.
    pub fn value(&self) -> &'a T {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced a cursor that is past the end"),
        }
    }

    /// Moves the cursor to the in-order successor of the current node
    ///
    /// At the end, the cursor stays at the end.
    pub fn move_next(&mut self) -> &mut Self {
        self.current = self.current.and_then(|ptr| successor(self.nodes, ptr));
        self
    }
}

impl<'a, T, S> Iterator for Cursor<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.move_next();
        Some(value)
    }
}

impl<'a, T, S> FusedIterator for Cursor<'a, T, S> {}

/// A cursor that walks a tree in in-order and can modify the values it passes over
///
/// See `Cursor` for how the cursor moves. The value, status tag, height and null path length of the
/// current node can be changed through the cursor, never the shape of the tree. `as_cursor` gives a
/// read-only view of the current position.
///
/// There is no way to get a `NodeMut` out of a cursor, so the node it points at cannot be removed
/// while the cursor is alive:
///
/// ```compile_fail
/// use bintree::NodeArena;
///
/// let mut arena = NodeArena::new();
/// let root = arena.insert_root(1);
/// let mut cursor = arena.cursor_mut(root);
/// cursor.node_mut().unwrap().remove_left_subtree();
/// ```
pub struct CursorMut<'a, T, S = ()> {
    nodes: &'a mut Nodes<T, S>,
    current: Option<Ptr>,
}

impl<'a, T: fmt::Debug, S> fmt::Debug for CursorMut<'a, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.get())
            .finish()
    }
}

impl<'a, T, S> PartialEq for CursorMut<'a, T, S> {
    fn eq(&self, other: &Self) -> bool {
        same_position((&*self.nodes, self.current), (&*other.nodes, other.current))
    }
}

impl<'a, T, S> Eq for CursorMut<'a, T, S> {}

impl<'a, T, S> CursorMut<'a, T, S> {
    pub(crate) fn new(nodes: &'a mut Nodes<T, S>, current: Option<Ptr>) -> Self {
        Self {nodes, current}
    }

    /// Returns a read-only cursor at the same position
    pub fn as_cursor(&self) -> Cursor<'_, T, S> {
        Cursor::new(&*self.nodes, self.current)
    }

    /// Returns true if the cursor has moved past the last node
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the node the cursor points at, or `None` at the end
    pub fn node(&self) -> Option<Node<'_, T, S>> {
        self.as_cursor().node()
    }

    /// Returns the status tag of the node the cursor points at, or `None` at the end
    pub fn status_mut(&mut self) -> Option<&mut S> {
        let ptr = self.current?;
        Some(&mut linked_mut(&mut *self.nodes, ptr).status)
    }

    /// Sets the cached height of the node the cursor points at
    ///
    /// Returns false and does nothing if the cursor is at the end.
    pub fn set_height(&mut self, height: i32) -> bool {
        match self.current {
            Some(ptr) => {
                linked_mut(&mut *self.nodes, ptr).height = height;
                true
            },
            None => false,
        }
    }

    /// Sets the null path length of the node the cursor points at
    ///
    /// Returns false and does nothing if the cursor is at the end.
    pub fn set_null_path_length(&mut self, null_path_length: i32) -> bool {
        match self.current {
            Some(ptr) => {
                linked_mut(&mut *self.nodes, ptr).null_path_length = null_path_length;
                true
            },
            None => false,
        }
    }

    /// Returns the value of the node the cursor points at, or `None` at the end
    pub fn get(&self) -> Option<&T> {
        let ptr = self.current?;
        Some(&linked(&*self.nodes, ptr).value)
    }

    /// Returns the value of the node the cursor points at, or `None` at the end
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let ptr = self.current?;
        Some(&mut linked_mut(&mut *self.nodes, ptr).value)
    }

    /// Returns the value of the node the cursor points at
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end. Use `get` to check.
    pub fn value(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced a cursor that is past the end"),
        }
    }

    /// Returns the value of the node the cursor points at
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end. Use `get_mut` to check.
    pub fn value_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(value) => value,
            None => panic!("dereferenced a cursor that is past the end"),
        }
    }

    /// Moves the cursor to the in-order successor of the current node
    ///
    /// At the end, the cursor stays at the end.
    pub fn move_next(&mut self) -> &mut Self {
        self.current = self.current.and_then(|ptr| successor(&*self.nodes, ptr));
        self
    }

    /// Moves the cursor to the in-order successor and returns the value it was pointing at
    ///
    /// Returns `None` without moving if the cursor is already at the end.
    pub fn advance(&mut self) -> Option<&mut T> {
        let ptr = self.current?;
        self.current = successor(&*self.nodes, ptr);
        Some(&mut linked_mut(&mut *self.nodes, ptr).value)
    }
}
