use std::fmt;
use std::mem;
use std::cmp::Ordering;
use std::ptr;

use crate::arena::{self, linked, linked_mut, InnerNode, NodeArena, NodeId, Nodes};
use crate::cursor::{leftmost, successor};
use crate::error::{NavError, OccupiedError, Side};
use crate::slab::Ptr;
use crate::traverse::{
    InorderWalk,
    IterInorder,
    IterLevelorder,
    IterPostorder,
    IterPreorder,
    LevelorderWalk,
    PostorderWalk,
    PreorderWalk,
};

/// The link that holds a node
///
/// For a child this is a link inside its parent. A root is held by something outside of the tree
/// (a local variable, a field of a tree type, ...), which the node itself knows nothing about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentSlot {
    /// The node is a root and is held by the caller
    Root,
    /// The node is held by the `side` link of `parent`
    Child {
        parent: NodeId,
        side: Side,
    },
}

impl ParentSlot {
    /// Returns the node currently held in this slot
    ///
    /// The root slot lives outside of the tree, so the caller passes whatever it uses to hold the
    /// root. `root` is ignored for child slots.
    pub fn occupant<T, S>(self, arena: &NodeArena<T, S>, root: Option<NodeId>) -> Option<NodeId> {
        match self {
            ParentSlot::Root => root.filter(|&id| arena.contains(id)),
            ParentSlot::Child {parent, side} => arena.node(parent)?.child(side).map(|node| node.id()),
        }
    }
}

/// A single node of a binary tree
///
/// This is a read-only view into a `NodeArena`. It is cheap to copy and can be used to navigate
/// anywhere in the tree the node belongs to, including upwards through `parent`.
pub struct Node<'a, T, S = ()> {
    nodes: &'a Nodes<T, S>,
    ptr: Ptr,
    node: &'a InnerNode<T, S>,
}

impl<'a, T, S> fmt::Debug for Node<'a, T, S>
    where T: fmt::Debug,
          S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("status", self.status())
            .field("left", &self.node.left.map(NodeId))
            .field("right", &self.node.right.map(NodeId))
            .finish()
    }
}

impl<'a, T, S> Clone for Node<'a, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, S> Copy for Node<'a, T, S> {}

impl<'a, T, S> PartialEq for Node<'a, T, S> {
    /// Two nodes are equal if they are the same node of the same arena. Use `value()` to compare
    /// payloads.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.nodes, other.nodes) && self.ptr == other.ptr
    }
}

impl<'a, T, S> Eq for Node<'a, T, S> {}

impl<'a, T, S> Node<'a, T, S> {
    /// Creates a `Node`, or returns `None` if `ptr` has been released
    pub(crate) fn new(nodes: &'a Nodes<T, S>, ptr: Ptr) -> Option<Self> {
        nodes.get(ptr).map(|node| Self::from_parts(nodes, ptr, node))
    }

    pub(crate) fn from_parts(nodes: &'a Nodes<T, S>, ptr: Ptr, node: &'a InnerNode<T, S>) -> Self {
        Self {nodes, ptr, node}
    }

    /// Creates a `Node` from a pointer that was read out of a link
    pub(crate) fn attach(nodes: &'a Nodes<T, S>, ptr: Ptr) -> Self {
        Self::from_parts(nodes, ptr, linked(nodes, ptr))
    }

    fn link(&self, ptr: Option<Ptr>) -> Option<Self> {
        ptr.map(|ptr| Self::attach(self.nodes, ptr))
    }

    /// Returns the handle of this node
    pub fn id(&self) -> NodeId {
        NodeId(self.ptr)
    }

    /// Returns the value of this node
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// Returns the status tag of this node
    pub fn status(&self) -> &'a S {
        &self.node.status
    }

    /// Returns the cached height of the subtree rooted at this node
    ///
    /// The height is maintained by callers and is not updated when the tree changes.
    pub fn height(&self) -> i32 {
        self.node.height
    }

    pub fn null_path_length(&self) -> i32 {
        self.node.null_path_length
    }

    /// Returns the height to use in balance computations
    ///
    /// This is the cached height, except that a height of 0 is reported as -1 so that an absent
    /// subtree and a single leaf are never confused.
    pub fn stature(&self) -> i32 {
        if self.node.height != 0 {
            self.node.height
        } else {
            -1
        }
    }

    /// Returns true if this node and `other` hold equal values
    ///
    /// `==` on nodes compares identity. This compares payloads, so two distinct nodes (even from
    /// different arenas) can be value-equal.
    pub fn value_eq<S2>(&self, other: &Node<'_, T, S2>) -> bool
        where T: PartialEq,
    {
        self.value() == other.value()
    }

    /// Orders this node and `other` by their values
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use bintree::NodeArena;
    ///
    /// let mut arena = NodeArena::new();
    /// let root = arena.insert_root(5);
    /// let left = arena.node_mut(root).unwrap().insert_left_child(3).unwrap().id();
    ///
    /// let root = arena.node(root).unwrap();
    /// let left = arena.node(left).unwrap();
    /// assert_eq!(left.cmp_value(&root), Ordering::Less);
    /// assert!(left.value_lt(&root));
    /// assert!(!root.value_lt(&left));
    /// ```
    pub fn cmp_value<S2>(&self, other: &Node<'_, T, S2>) -> Ordering
        where T: Ord,
    {
        self.value().cmp(other.value())
    }

    /// Returns true if this node's value is less than the value of `other`
    pub fn value_lt<S2>(&self, other: &Node<'_, T, S2>) -> bool
        where T: PartialOrd,
    {
        self.value() < other.value()
    }

    /// Returns the parent of this node, or `None` if this node is a root
    pub fn parent(&self) -> Option<Self> {
        self.link(self.node.parent)
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<Self> {
        self.link(self.node.left)
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<Self> {
        self.link(self.node.right)
    }

    /// Returns the child on the given side of this node, if any
    pub fn child(&self, side: Side) -> Option<Self> {
        self.link(self.node.child(side))
    }

    pub fn has_parent(&self) -> bool {
        self.node.parent.is_some()
    }

    pub fn is_root(&self) -> bool {
        !self.has_parent()
    }

    /// Returns which link of its parent holds this node, or `None` if this node is a root
    pub fn side(&self) -> Option<Side> {
        let parent = linked(self.nodes, self.node.parent?);
        if parent.left == Some(self.ptr) {
            Some(Side::Left)
        } else {
            debug_assert_eq!(parent.right, Some(self.ptr));
            Some(Side::Right)
        }
    }

    pub fn is_left_child(&self) -> bool {
        self.side() == Some(Side::Left)
    }

    pub fn is_right_child(&self) -> bool {
        self.side() == Some(Side::Right)
    }

    /// Returns true if this node has a left subtree
    pub fn has_left_child(&self) -> bool {
        self.node.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right_child(&self) -> bool {
        self.node.right.is_some()
    }

    pub fn has_child(&self) -> bool {
        self.has_left_child() || self.has_right_child()
    }

    pub fn has_both_children(&self) -> bool {
        self.has_left_child() && self.has_right_child()
    }

    pub fn is_leaf(&self) -> bool {
        !self.has_child()
    }

    /// Returns the other child of this node's parent
    ///
    /// The result is `Ok(None)` if the parent has no other child, and an error if this node is a
    /// root.
    pub fn sibling(&self) -> Result<Option<Self>, NavError> {
        let parent = self.parent().ok_or(NavError::NoParent)?;
        let side = self.side().ok_or(NavError::NoParent)?;
        Ok(parent.child(side.opposite()))
    }

    /// Returns the sibling of this node's parent
    ///
    /// The result is `Ok(None)` if the grandparent has no other child, and an error if this node
    /// has no parent or no grandparent.
    pub fn uncle(&self) -> Result<Option<Self>, NavError> {
        let parent = self.parent().ok_or(NavError::NoParent)?;
        parent.sibling().map_err(|_| NavError::NoGrandparent)
    }

    /// Returns the link that holds this node
    ///
    /// See `ParentSlot::occupant` for reading the slot back.
    pub fn from_parent_slot(&self) -> ParentSlot {
        match (self.node.parent, self.side()) {
            (Some(parent), Some(side)) => ParentSlot::Child {parent: NodeId(parent), side},
            _ => ParentSlot::Root,
        }
    }

    /// Returns the number of nodes in the subtree rooted at this node
    ///
    /// This is `1 + left.size() + right.size()`, counting an absent child as 0. The size is not
    /// cached, and it is counted with an explicit stack so that arbitrarily deep trees are fine.
    ///
    /// Time complexity: `O(n)`
    pub fn size(&self) -> usize {
        self.iter_preorder().count()
    }

    /// Returns the first node of this subtree in in-order
    pub fn leftmost(&self) -> Self {
        Self::attach(self.nodes, leftmost(self.nodes, self.ptr))
    }

    /// Returns the in-order successor of this node, or `None` if this is the last node of its
    /// tree
    ///
    /// The successor may be outside of the subtree rooted at this node.
    pub fn next(&self) -> Option<Self> {
        self.link(successor(self.nodes, self.ptr))
    }

    /// Iterates over the subtree rooted at this node in pre-order
    pub fn iter_preorder(&self) -> IterPreorder<'a, T, S> {
        IterPreorder::new(self.nodes, self.ptr)
    }

    /// Iterates over the subtree rooted at this node in in-order
    pub fn iter_inorder(&self) -> IterInorder<'a, T, S> {
        IterInorder::new(self.nodes, self.ptr)
    }

    /// Iterates over the subtree rooted at this node in post-order
    pub fn iter_postorder(&self) -> IterPostorder<'a, T, S> {
        IterPostorder::new(self.nodes, self.ptr)
    }

    /// Iterates over the subtree rooted at this node in level-order
    pub fn iter_levelorder(&self) -> IterLevelorder<'a, T, S> {
        IterLevelorder::new(self.nodes, self.ptr)
    }

    /// Calls `visit` with each value of the subtree in pre-order
    pub fn trav_pre_order<F: FnMut(&'a T)>(&self, mut visit: F) {
        self.iter_preorder().for_each(|node| visit(node.value()));
    }

    /// Calls `visit` with each value of the subtree in in-order
    pub fn trav_in_order<F: FnMut(&'a T)>(&self, mut visit: F) {
        self.iter_inorder().for_each(|node| visit(node.value()));
    }

    /// Calls `visit` with each value of the subtree in post-order
    pub fn trav_post_order<F: FnMut(&'a T)>(&self, mut visit: F) {
        self.iter_postorder().for_each(|node| visit(node.value()));
    }

    /// Calls `visit` with each value of the subtree in level-order
    pub fn trav_level_order<F: FnMut(&'a T)>(&self, mut visit: F) {
        self.iter_levelorder().for_each(|node| visit(node.value()));
    }
}

/// A single mutable node of a binary tree
///
/// Holds the arena mutably, so only one `NodeMut` can exist at a time. Navigation either reborrows
/// (`left_mut`, `parent_mut`, ...) or consumes the view (`into_left`, `into_parent`, ...).
pub struct NodeMut<'a, T, S = ()> {
    nodes: &'a mut Nodes<T, S>,
    ptr: Ptr,
}

impl<'a, T, S> fmt::Debug for NodeMut<'a, T, S>
    where T: fmt::Debug,
          S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeMut")
            .field("value", self.value())
            .field("status", self.status())
            .field("left", &"...")
            .field("right", &"...")
            .finish()
    }
}

impl<'a, T, S> NodeMut<'a, T, S> {
    /// Creates a `NodeMut`, or returns `None` if `ptr` has been released
    pub(crate) fn new(nodes: &'a mut Nodes<T, S>, ptr: Ptr) -> Option<Self> {
        if nodes.contains(ptr) {
            Some(Self {nodes, ptr})
        } else {
            None
        }
    }

    fn inner(&self) -> &InnerNode<T, S> {
        linked(self.nodes, self.ptr)
    }

    fn inner_mut(&mut self) -> &mut InnerNode<T, S> {
        linked_mut(self.nodes, self.ptr)
    }

    /// Reborrows the view to point at another node of the same arena
    fn reborrow(&mut self, ptr: Option<Ptr>) -> Option<NodeMut<'_, T, S>> {
        match ptr {
            Some(ptr) => Some(NodeMut {nodes: &mut *self.nodes, ptr}),
            None => None,
        }
    }

    /// Moves the view to point at another node of the same arena
    fn relink(self, ptr: Option<Ptr>) -> Option<Self> {
        match ptr {
            Some(ptr) => Some(NodeMut {nodes: self.nodes, ptr}),
            None => None,
        }
    }

    /// Returns the handle of this node
    pub fn id(&self) -> NodeId {
        NodeId(self.ptr)
    }

    /// Returns a read-only view of this node, for use with the structural queries on `Node`
    pub fn as_node(&self) -> Node<'_, T, S> {
        Node::attach(self.nodes, self.ptr)
    }

    /// Converts into a read-only view of this node
    pub fn into_node(self) -> Node<'a, T, S> {
        let NodeMut {nodes, ptr} = self;
        Node::attach(nodes, ptr)
    }

    /// Returns the value of this node
    pub fn value(&self) -> &T {
        &self.inner().value
    }

    /// Returns the value of this node
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.inner_mut().value
    }

    /// Returns the value of this node, consuming the node in the process
    pub fn into_value_mut(self) -> &'a mut T {
        let NodeMut {nodes, ptr} = self;
        &mut linked_mut(nodes, ptr).value
    }

    /// Replaces the value of this node and returns the previous value
    pub fn replace_value(&mut self, value: T) -> T {
        mem::replace(self.value_mut(), value)
    }

    pub fn status(&self) -> &S {
        &self.inner().status
    }

    pub fn status_mut(&mut self) -> &mut S {
        &mut self.inner_mut().status
    }

    pub fn height(&self) -> i32 {
        self.inner().height
    }

    pub fn set_height(&mut self, height: i32) {
        self.inner_mut().height = height;
    }

    pub fn null_path_length(&self) -> i32 {
        self.inner().null_path_length
    }

    pub fn set_null_path_length(&mut self, null_path_length: i32) {
        self.inner_mut().null_path_length = null_path_length;
    }

    pub fn parent_mut(&mut self) -> Option<NodeMut<'_, T, S>> {
        let parent = self.inner().parent;
        self.reborrow(parent)
    }

    pub fn left_mut(&mut self) -> Option<NodeMut<'_, T, S>> {
        let left = self.inner().left;
        self.reborrow(left)
    }

    pub fn right_mut(&mut self) -> Option<NodeMut<'_, T, S>> {
        let right = self.inner().right;
        self.reborrow(right)
    }

    pub fn child_mut(&mut self, side: Side) -> Option<NodeMut<'_, T, S>> {
        let child = self.inner().child(side);
        self.reborrow(child)
    }

    pub fn into_parent(self) -> Option<Self> {
        let parent = self.inner().parent;
        self.relink(parent)
    }

    pub fn into_left(self) -> Option<Self> {
        let left = self.inner().left;
        self.relink(left)
    }

    pub fn into_right(self) -> Option<Self> {
        let right = self.inner().right;
        self.relink(right)
    }

    pub fn into_child(self, side: Side) -> Option<Self> {
        let child = self.inner().child(side);
        self.relink(child)
    }

    /// Returns the in-order successor of this node, or `None` if this is the last node of its
    /// tree
    pub fn next_mut(&mut self) -> Option<NodeMut<'_, T, S>> {
        let next = successor(self.nodes, self.ptr);
        self.reborrow(next)
    }

    /// Moves to the in-order successor of this node, or returns `None` if this is the last node
    /// of its tree
    pub fn into_next(self) -> Option<Self> {
        let next = successor(self.nodes, self.ptr);
        self.relink(next)
    }

    /// Inserts a new node with the given status as the `side` child of this node and returns it
    ///
    /// Existing children are never overwritten: if the slot is occupied, the tree is left as is
    /// and the value is returned in the error.
    pub fn insert_child_with(
        &mut self,
        side: Side,
        value: T,
        status: S,
    ) -> Result<NodeMut<'_, T, S>, OccupiedError<T>> {
        if self.inner().child(side).is_some() {
            log::debug!("not overwriting the {} child of {:?}", side, self.ptr);
            return Err(OccupiedError {side, value});
        }

        let child = self.nodes.push(InnerNode::new(value, status, Some(self.ptr)));
        *self.inner_mut().child_mut(side) = Some(child);

        Ok(NodeMut {nodes: &mut *self.nodes, ptr: child})
    }

    pub fn insert_left_child_with(&mut self, value: T, status: S) -> Result<NodeMut<'_, T, S>, OccupiedError<T>> {
        self.insert_child_with(Side::Left, value, status)
    }

    pub fn insert_right_child_with(&mut self, value: T, status: S) -> Result<NodeMut<'_, T, S>, OccupiedError<T>> {
        self.insert_child_with(Side::Right, value, status)
    }

    /// Removes the `side` subtree of this node and returns the number of nodes released
    pub fn remove_child_subtree(&mut self, side: Side) -> usize {
        match self.inner().child(side) {
            Some(child) => arena::remove_subtree(self.nodes, child),
            None => 0,
        }
    }

    pub fn remove_left_subtree(&mut self) -> usize {
        self.remove_child_subtree(Side::Left)
    }

    pub fn remove_right_subtree(&mut self) -> usize {
        self.remove_child_subtree(Side::Right)
    }

    /// Calls `visit` with each value of the subtree in pre-order
    pub fn trav_pre_order<F: FnMut(&mut T)>(&mut self, mut visit: F) {
        let mut walk = PreorderWalk::new(Some(self.ptr));
        while let Some(ptr) = walk.next(self.nodes) {
            visit(&mut linked_mut(self.nodes, ptr).value);
        }
    }

    /// Calls `visit` with each value of the subtree in in-order
    pub fn trav_in_order<F: FnMut(&mut T)>(&mut self, mut visit: F) {
        let mut walk = InorderWalk::new(self.nodes, Some(self.ptr));
        while let Some(ptr) = walk.next(self.nodes) {
            visit(&mut linked_mut(self.nodes, ptr).value);
        }
    }

    /// Calls `visit` with each value of the subtree in post-order
    pub fn trav_post_order<F: FnMut(&mut T)>(&mut self, mut visit: F) {
        let mut walk = PostorderWalk::new(self.nodes, Some(self.ptr));
        while let Some(ptr) = walk.next(self.nodes) {
            visit(&mut linked_mut(self.nodes, ptr).value);
        }
    }

    /// Calls `visit` with each value of the subtree in level-order
    pub fn trav_level_order<F: FnMut(&mut T)>(&mut self, mut visit: F) {
        let mut walk = LevelorderWalk::new(Some(self.ptr));
        while let Some(ptr) = walk.next(self.nodes) {
            visit(&mut linked_mut(self.nodes, ptr).value);
        }
    }
}

impl<'a, T, S: Default> NodeMut<'a, T, S> {
    /// Inserts a new node as the `side` child of this node and returns it
    ///
    /// See `insert_child_with`.
    pub fn insert_child(&mut self, side: Side, value: T) -> Result<NodeMut<'_, T, S>, OccupiedError<T>> {
        self.insert_child_with(side, value, S::default())
    }

    /// Inserts a new node as the left child of this node and returns it
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{NodeArena, Side};
    ///
    /// let mut arena = NodeArena::new();
    /// let root = arena.insert_root(5);
    /// let mut node = arena.node_mut(root).unwrap();
    /// node.insert_left_child(3).unwrap();
    ///
    /// // The slot is taken, so the value comes back
    /// let err = node.insert_left_child(4).unwrap_err();
    /// assert_eq!(err.side, Side::Left);
    /// assert_eq!(err.into_value(), 4);
    /// ```
    pub fn insert_left_child(&mut self, value: T) -> Result<NodeMut<'_, T, S>, OccupiedError<T>> {
        self.insert_child(Side::Left, value)
    }

    /// Inserts a new node as the right child of this node and returns it
    pub fn insert_right_child(&mut self, value: T) -> Result<NodeMut<'_, T, S>, OccupiedError<T>> {
        self.insert_child(Side::Right, value)
    }
}
