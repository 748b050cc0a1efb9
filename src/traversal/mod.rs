//! Everything related to traversing trees.
//!
//! The module is home to the following items:
//! - [`DepthFirst`] — an iterator visiting a tree in depth-first *pre-order*, using an explicit stack
//! - [`BreadthFirst`] — an iterator visiting a tree in breadth-first *level order*, one level buffer at a time
//!
//! Both of them work on any [`Traversable`] node type and never recurse, so trees of any depth can be traversed without risking a stack overflow. Their bookkeeping is kept in a [`ListStorage`], which is a [`Vec`] by default; use the `with_storage` constructors to supply a different one, such as an [`ArrayVec`] for traversals which must not allocate. Fixed-capacity storages can run out of room, which is reported by the fallible `try_next` methods.
//!
//! [`DepthFirst`]: struct.DepthFirst.html " "
//! [`BreadthFirst`]: struct.BreadthFirst.html " "
//! [`Traversable`]: ../tree/trait.Traversable.html " "
//! [`ListStorage`]: ../storage/trait.ListStorage.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "

mod depth_first;
mod breadth_first;

pub use depth_first::DepthFirst;
pub use breadth_first::BreadthFirst;
