//! Traversal orders over a subtree
//!
//! Each order is implemented once as a "walk" that yields node pointers and borrows the node storage
//! only for the duration of each step. The read-only iterators in this module wrap a walk, and the
//! mutable visitors on `NodeMut` drive the same walks while handing out `&mut T` between steps.

mod preorder;
mod inorder;
mod postorder;
mod levelorder;

pub use preorder::IterPreorder;
pub use inorder::IterInorder;
pub use postorder::IterPostorder;
pub use levelorder::IterLevelorder;

pub(crate) use preorder::PreorderWalk;
pub(crate) use inorder::InorderWalk;
pub(crate) use postorder::PostorderWalk;
pub(crate) use levelorder::LevelorderWalk;
