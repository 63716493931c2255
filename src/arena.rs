use std::fmt;

use crate::slab::{Ptr, Slab};
use crate::error::Side;
use crate::node::{Node, NodeMut};
use crate::cursor::{Cursor, CursorMut};
use crate::traverse::PostorderWalk;

pub(crate) type Nodes<T, S> = Slab<InnerNode<T, S>>;

/// The storage for a single node
///
/// `left` and `right` are the owning links: removing a node removes everything reachable through
/// them. `parent` only observes and is never followed during teardown.
#[derive(Debug, Clone)]
pub(crate) struct InnerNode<T, S> {
    pub value: T,
    pub status: S,
    pub parent: Option<Ptr>,
    pub left: Option<Ptr>,
    pub right: Option<Ptr>,
    pub height: i32,
    pub null_path_length: i32,
}

impl<T, S> InnerNode<T, S> {
    pub fn new(value: T, status: S, parent: Option<Ptr>) -> Self {
        Self {
            value,
            status,
            parent,
            left: None,
            right: None,
            height: 0,
            null_path_length: 1,
        }
    }

    #[inline]
    pub fn child(&self, side: Side) -> Option<Ptr> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub fn child_mut(&mut self, side: Side) -> &mut Option<Ptr> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Looks up a node through a link stored in another node
///
/// # Panics
///
/// Links always point at live nodes, so a failed lookup means the tree structure is corrupt.
#[inline]
pub(crate) fn linked<T, S>(nodes: &Nodes<T, S>, ptr: Ptr) -> &InnerNode<T, S> {
    match nodes.get(ptr) {
        Some(node) => node,
        None => panic!("node link {:?} points at a released node", ptr),
    }
}

/// Mutable version of `linked`
#[inline]
pub(crate) fn linked_mut<T, S>(nodes: &mut Nodes<T, S>, ptr: Ptr) -> &mut InnerNode<T, S> {
    match nodes.get_mut(ptr) {
        Some(node) => node,
        None => panic!("node link {:?} points at a released node", ptr),
    }
}

/// A handle to a node stored in a `NodeArena`
///
/// Handles are cheap to copy and stay valid until the node they name is removed. After that they
/// never resolve again, even if the arena reuses the storage for a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NodeId(pub(crate) Ptr);

/// Storage for binary tree nodes
///
/// Every node lives in the arena. The arena does not know which node is "the" root of anything:
/// it can hold any number of independent trees, and callers keep the `NodeId` of each root they
/// care about. A node is created as a root with `insert_root` or as the child of an existing node
/// with `NodeMut::insert_left_child` / `NodeMut::insert_right_child`.
#[derive(Clone)]
pub struct NodeArena<T, S = ()> {
    pub(crate) nodes: Nodes<T, S>,
}

impl<T, S> Default for NodeArena<T, S> {
    fn default() -> Self {
        Self {
            nodes: Default::default(),
        }
    }
}

impl<T, S> fmt::Debug for NodeArena<T, S>
    where T: fmt::Debug,
          S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeArena")
            .field("len", &self.len())
            .field("roots", &self.roots().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> NodeArena<T> {
    /// Creates an empty arena for nodes without a status tag
    ///
    /// The arena is initially created with a capacity of 0, so it will not allocate until it is
    /// first inserted into. Use `NodeArena::default()` for an arena with a status type other than
    /// `()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::NodeArena;
    /// let arena: NodeArena<i32> = NodeArena::new();
    /// assert!(arena.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty arena with room for at least `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Nodes::with_capacity(capacity),
        }
    }
}

impl<T, S> NodeArena<T, S> {
    /// Returns the number of nodes in the arena, across all trees
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes the arena can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves capacity for at least `additional` more nodes
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Removes every node from the arena
    ///
    /// All previously returned `NodeId`s stop resolving.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Inserts a standalone node (the root of a new tree) with the given status
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::NodeArena;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Color { Red, Black }
    ///
    /// let mut arena = NodeArena::default();
    /// let root = arena.insert_root_with(10, Color::Black);
    /// assert_eq!(arena.node(root).unwrap().status(), &Color::Black);
    /// ```
    pub fn insert_root_with(&mut self, value: T, status: S) -> NodeId {
        NodeId(self.nodes.push(InnerNode::new(value, status, None)))
    }

    /// Returns true if `id` names a node that is still in the arena
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id.0)
    }

    /// Returns a read-only view of the node named by `id`, or `None` if it has been removed
    pub fn node(&self, id: NodeId) -> Option<Node<'_, T, S>> {
        Node::new(&self.nodes, id.0)
    }

    /// Returns a mutable view of the node named by `id`, or `None` if it has been removed
    pub fn node_mut(&mut self, id: NodeId) -> Option<NodeMut<'_, T, S>> {
        NodeMut::new(&mut self.nodes, id.0)
    }

    /// Returns every node in the arena that has no parent
    ///
    /// The order is unspecified.
    pub fn roots(&self) -> impl Iterator<Item=Node<'_, T, S>> + '_ {
        self.nodes.iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(move |(ptr, node)| Node::from_parts(&self.nodes, ptr, node))
    }

    /// Returns a read-only cursor positioned at `id`
    ///
    /// If `id` has been removed the cursor starts at the end.
    pub fn cursor(&self, id: NodeId) -> Cursor<'_, T, S> {
        let current = Some(id.0).filter(|&ptr| self.nodes.contains(ptr));
        Cursor::new(&self.nodes, current)
    }

    /// Returns a cursor positioned at `id` that can modify the values it passes over
    ///
    /// If `id` has been removed the cursor starts at the end.
    pub fn cursor_mut(&mut self, id: NodeId) -> CursorMut<'_, T, S> {
        let current = Some(id.0).filter(|&ptr| self.nodes.contains(ptr));
        CursorMut::new(&mut self.nodes, current)
    }

    /// Removes the node named by `id` along with its entire subtree
    ///
    /// The node is unlinked from its parent first, so the rest of its tree is left intact. Returns
    /// the number of nodes released, or `None` if `id` was already removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::NodeArena;
    ///
    /// let mut arena = NodeArena::new();
    /// let root = arena.insert_root(1);
    /// let mut node = arena.node_mut(root).unwrap();
    /// let left = node.insert_left_child(2).unwrap().id();
    /// node.insert_right_child(3).unwrap();
    ///
    /// assert_eq!(arena.remove_subtree(left), Some(1));
    /// assert_eq!(arena.len(), 2);
    /// assert!(!arena.node(root).unwrap().has_left_child());
    /// ```
    pub fn remove_subtree(&mut self, id: NodeId) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }

        Some(remove_subtree(&mut self.nodes, id.0))
    }
}

impl<T, S: Default> NodeArena<T, S> {
    /// Inserts a standalone node (the root of a new tree) with a default status
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::NodeArena;
    ///
    /// let mut arena = NodeArena::new();
    /// let root = arena.insert_root("root");
    /// let node = arena.node(root).unwrap();
    /// assert!(node.is_root());
    /// assert!(node.is_leaf());
    /// ```
    pub fn insert_root(&mut self, value: T) -> NodeId {
        self.insert_root_with(value, S::default())
    }
}

/// Unlinks `ptr` from its parent and releases it and every node below it in post-order
///
/// `ptr` must name a live node. Returns the number of nodes released.
pub(crate) fn remove_subtree<T, S>(nodes: &mut Nodes<T, S>, ptr: Ptr) -> usize {
    if let Some(parent_ptr) = linked(nodes, ptr).parent {
        let parent = linked_mut(nodes, parent_ptr);
        if parent.left == Some(ptr) {
            parent.left = None;
        } else {
            debug_assert_eq!(parent.right, Some(ptr));
            parent.right = None;
        }
    }

    // Children go before their parent. The walk only reads links of nodes that have not been
    // released yet, since a node is yielded only after both of its subtrees are done.
    let mut walk = PostorderWalk::new(nodes, Some(ptr));
    let mut released = 0;
    while let Some(current) = walk.next(nodes) {
        nodes.remove(current);
        released += 1;
    }

    log::trace!("released subtree rooted at {:?} ({} nodes)", ptr, released);
    released
}
