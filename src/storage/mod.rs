//! Utilities for treating the bookkeeping buffers of traversals generically.
//!
//! This module is home for the following items:
//! - [`ListStorage`], the trait for list-like collections which traversals keep their pending nodes in
//! - [`DefaultStorage`], a type definition for the storage used by traversals unless a different one is specified; takes different values depending on feature flags
//!
//! Implementations are provided for [`Vec`] and [`VecDeque`] (with the `alloc` feature) and for [`ArrayVec`] (always).
//!
//! [`ListStorage`]: trait.ListStorage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "

#[cfg(feature = "alloc")]
mod alloc_impl;
mod arrayvec_impl;

#[cfg(test)]
mod tests;

use crate::CapacityError;

/// Trait for list-like containers which can hold the pending nodes of a traversal.
///
/// Only the first five methods are required; everything else has a default implementation in terms of them, which implementors are free to override with something faster.
///
/// There's a number of rules which have to be followed by the container:
/// - `new` must return an empty storage, i.e. one which has `len() == 0` and `is_empty() == true`;
/// - `push` and `pop` must operate on the back of the list, so that the storage can serve as a stack;
/// - an element which was pushed must be retrieveable through `get` in the exact same state and at the same index until it is popped.
///
/// Traversals rely on those rules for the order in which they visit nodes.
pub trait ListStorage: Sized {
    /// The type of values in the container.
    type Element;

    /// Creates a new empty collection. Dynamically-allocated collections created this way should not allocate memory.
    fn new() -> Self;
    /// Appends an element to the back of the collection.
    ///
    /// # Panics
    /// Collections with a fixed capacity panic if they are full. Use [`try_push`] to handle that case.
    ///
    /// [`try_push`]: #method.try_push " "
    fn push(&mut self, element: Self::Element);
    /// Removes the last element from the collection and returns it, or `None` if it is empty.
    fn pop(&mut self) -> Option<Self::Element>;
    /// Returns the number of elements in the collection, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Returns a reference to the specified element in the collection, or `None` if the index is out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Element>;

    /// Returns `true` if the collection contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back of the collection, or returns an error if the collection has a fixed capacity and is already full.
    ///
    /// The default implementation assumes that the collection can grow and never fails.
    #[inline(always)]
    fn try_push(&mut self, element: Self::Element) -> Result<(), CapacityError> {
        self.push(element);
        Ok(())
    }
    /// Removes all elements from the collection, keeping its allocated capacity.
    #[inline]
    fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}

/// The default storage type used by the traversals when a storage type is not provided.
///
/// This is chosen according to the following strategy:
/// - If the `alloc` feature flag is enabled, [`Vec`] is used
/// - Otherwise, an [`ArrayVec`] *with room for 32 elements* is used
///
/// [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
/// [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
pub type DefaultStorage<T> = _DefaultStorage<T>;

#[cfg(feature = "alloc")]
type _DefaultStorage<T> = alloc::vec::Vec<T>;

#[cfg(not(feature = "alloc"))]
type _DefaultStorage<T> = arrayvec::ArrayVec<[T; 32]>;
