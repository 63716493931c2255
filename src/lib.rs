//! Generic binary tree nodes with parent links
//!
//! Nodes are stored in a [`NodeArena`] and named by [`NodeId`] handles. Each node carries a value
//! of type `T`, a status tag of type `S` (a color for red-black trees, for example), and the
//! cached height and null path length fields that balanced trees and leftist heaps keep up to
//! date. The node type knows nothing about ordering: it provides navigation, structural queries,
//! child insertion, the four traversal orders and in-order cursors, and leaves the tree
//! algorithms to the types built on top of it.
//!
//! # Examples
//!
//! ```
//! use bintree::NodeArena;
//!
//! let mut arena = NodeArena::new();
//! let root = arena.insert_root(2);
//! let mut node = arena.node_mut(root).unwrap();
//! node.insert_left_child(1).unwrap();
//! node.insert_right_child(3).unwrap();
//!
//! let node = arena.node(root).unwrap();
//! let mut values = Vec::new();
//! node.trav_in_order(|&value| values.push(value));
//! assert_eq!(values, vec![1, 2, 3]);
//! assert_eq!(node.size(), 3);
//! ```

mod slab;
mod arena;
mod error;
pub mod node;
pub mod cursor;
pub mod traverse;
pub mod queue;

pub use arena::{NodeArena, NodeId};
pub use node::{Node, NodeMut, ParentSlot};
pub use cursor::{Cursor, CursorMut};
pub use error::{NavError, OccupiedError, Side};
pub use queue::Queue;
