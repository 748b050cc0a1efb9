//! Trees which can be traversed, and an owned tree type to go with them.
//!
//! The traversals in the [`traversal`] module only need one thing from a tree node: the ordered list of its children, or the lack thereof. That is described by the [`Traversable`] trait, which can be implemented for any tree type whose nodes own their children. [`Node`] is a ready-made implementation.
//!
//! # Example
//! ```rust
//! use ember::tree::{Node, Traversable};
//!
//! //        1
//! //      / | \
//! //     2  6  7
//! //    / \     \
//! //   3   4     8
//! //       |
//! //       5
//! let tree = Node::branch(1, vec![
//!     Node::branch(2, vec![
//!         Node::leaf(3),
//!         Node::branch(4, vec![Node::leaf(5)]),
//!     ]),
//!     Node::leaf(6),
//!     Node::branch(7, vec![Node::leaf(8)]),
//! ]);
//!
//! let pre_order: Vec<i32> = tree.depth_first().map(|node| node.value).collect();
//! assert_eq!(pre_order, [1, 2, 3, 4, 5, 6, 7, 8]);
//!
//! let level_order: Vec<i32> = tree.breadth_first().map(|node| node.value).collect();
//! assert_eq!(level_order, [1, 2, 6, 7, 3, 4, 8, 5]);
//! ```
//!
//! [`traversal`]: ../traversal/index.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`Node`]: struct.Node.html " "

#[cfg(feature = "alloc")]
mod node;
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub use node::Node;

use crate::traversal::{DepthFirst, BreadthFirst};

#[cfg(all(test, feature = "alloc"))]
mod tests;

/// Trait for tree nodes which own an ordered list of child nodes.
///
/// A node which returns `None` from [`children`] is a leaf. Returning an empty slice is also allowed and has the same effect on traversals.
///
/// Traversals only ever read the tree. Since nodes own their children, a `Traversable` tree cannot contain cycles, so every traversal is guaranteed to terminate.
///
/// [`children`]: #tymethod.children " "
pub trait Traversable: Sized {
    /// Returns the children of the node in their declared order, or `None` if the node is a leaf.
    fn children(&self) -> Option<&[Self]>;

    /// Returns an iterator visiting the subtree rooted at this node in depth-first pre-order, using the default storage.
    ///
    /// See [`DepthFirst`] for more.
    ///
    /// [`DepthFirst`]: ../traversal/struct.DepthFirst.html " "
    #[inline(always)]
    fn depth_first(&self) -> DepthFirst<'_, Self> {
        DepthFirst::new(self)
    }
    /// Returns an iterator visiting the subtree rooted at this node in breadth-first level order, using the default storage.
    ///
    /// See [`BreadthFirst`] for more.
    ///
    /// [`BreadthFirst`]: ../traversal/struct.BreadthFirst.html " "
    #[inline(always)]
    fn breadth_first(&self) -> BreadthFirst<'_, Self> {
        BreadthFirst::new(self)
    }
}
