use alloc::vec::Vec;
use core::{mem::ManuallyDrop, ptr};
use super::Traversable;

/// A node of an owned tree: an arbitrary payload plus an optional list of child nodes.
///
/// Absence of the child list marks a leaf. The tree is owned by its root, and traversals borrow it immutably.
///
/// Dropping a node frees its descendants iteratively, so trees of any depth can be dropped without exhausting the call stack. Because of that destructor, the fields cannot be moved out of a node by destructuring; use [`into_value`] or [`Option::take`] on the child list instead.
///
/// [`into_value`]: #method.into_value " "
/// [`Option::take`]: https://doc.rust-lang.org/std/option/enum.Option.html#method.take " "
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Node<T> {
    /// The data payload of the node.
    pub value: T,
    /// The child nodes in their declared order, or `None` for a leaf.
    pub children: Option<Vec<Node<T>>>,
}
impl<T> Node<T> {
    /// Creates a leaf node with the specified payload.
    #[inline(always)]
    pub const fn leaf(value: T) -> Self {
        Self {
            value,
            children: None,
        }
    }
    /// Creates a branch node with the specified payload and children.
    ///
    /// The resulting node is a branch even if `children` turns out to be empty.
    #[inline]
    pub fn branch(value: T, children: impl IntoIterator<Item = Self>) -> Self {
        Self {
            value,
            children: Some(children.into_iter().collect()),
        }
    }
    /// Returns `true` if the node has no child list, `false` otherwise.
    #[inline(always)]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
    /// Returns `true` if the node has a child list, `false` otherwise.
    #[inline(always)]
    pub const fn is_branch(&self) -> bool {
        self.children.is_some()
    }
    /// Appends a child to the node, turning it into a branch if it was a leaf. Returns a mutable reference to the new child, so that it can be given children of its own.
    ///
    /// # Example
    /// ```rust
    /// # use ember::tree::{Node, Traversable};
    /// let mut root = Node::leaf("root");
    /// root.push_child(Node::leaf("left"))
    ///     .push_child(Node::leaf("left of left"));
    /// root.push_child(Node::leaf("right"));
    ///
    /// let order: Vec<_> = root.depth_first().map(|node| node.value).collect();
    /// assert_eq!(order, ["root", "left", "left of left", "right"]);
    /// ```
    pub fn push_child(&mut self, child: Self) -> &mut Self {
        let children = self.children.get_or_insert_with(Vec::new);
        children.push(child);
        let last = children.len() - 1;
        &mut children[last]
    }
    /// Consumes the node, dropping its children and returning the payload.
    #[inline]
    pub fn into_value(self) -> T {
        let mut node = ManuallyDrop::new(self);
        drop(node.children.take());
        // The node is never dropped, so the payload is read out exactly once.
        unsafe { ptr::read(&node.value) }
    }
}
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut pending = match self.children.take() {
            Some(children) => children,
            None => return,
        };
        // Every node popped here has its child list detached before it goes out of scope, so its own destructor returns immediately.
        while let Some(mut node) = pending.pop() {
            if let Some(children) = node.children.take() {
                pending.extend(children);
            }
        }
    }
}
impl<T> From<T> for Node<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::leaf(value)
    }
}
impl<T> Traversable for Node<T> {
    #[inline(always)]
    fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }
}
