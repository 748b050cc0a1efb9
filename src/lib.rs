//! Lazy sequence producers and tree traversal iterators.
//!
//! ------------------------
//!
//! # Overview
//! Ember is a handful of small, independent producers of lazy sequences. Every one of them is an external iterator: a plain value which keeps its resumption point in its own fields and computes the next element only when [`Iterator::next`] is called. Nothing is ever materialized up front, which means that infinite sequences are just as easy to work with as finite ones: the consumer decides when to stop pulling.
//!
//! The producers are:
//! - [`BottlesOfBeer`] — the full text of the "99 Bottles of Beer" song, line by line
//! - [`Fibonacci`] — the infinite Fibonacci sequence, generic over the numeric type
//! - [`DepthFirst`] and [`BreadthFirst`] — pre-order and level-order traversals of any [`Traversable`] tree
//! - [`MergeSorted`] — the sorted union of two sorted (and possibly infinite) sequences
//!
//! # Storage
//! The traversals never recurse: they keep their bookkeeping in an explicit list-like buffer, described by the [`ListStorage`] trait. By default, a [`Vec`] is used, but any `ListStorage` will do, including [`ArrayVec`] for traversals which must not allocate. Fixed-capacity storages can run out of space, in which case the fallible `try_next` methods report a [`CapacityError`].
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only turns on the `std` features of `num-traits`, `thiserror` and `tracing`.
//! - `alloc` (**enabled by default**) — adds `ListStorage` trait implementations for [`Vec`] and [`VecDeque`], the owned [`Node`] tree and `String` output for the song. *This does not require standard library support.* Without it, the default storage is an [`ArrayVec`] of 32 elements.
//! - `doc_cfg` — uses the nightly-only `doc(cfg)` attribute to annotate feature-gated items in documentation.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `num-traits` (**required**) — `^0.2`
//!
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`Iterator::next`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html#tymethod.next " "
//! [`BottlesOfBeer`]: song/struct.BottlesOfBeer.html " "
//! [`Fibonacci`]: fibonacci/struct.Fibonacci.html " "
//! [`DepthFirst`]: traversal/struct.DepthFirst.html " "
//! [`BreadthFirst`]: traversal/struct.BreadthFirst.html " "
//! [`Traversable`]: tree/trait.Traversable.html " "
//! [`Node`]: tree/struct.Node.html " "
//! [`MergeSorted`]: merge/struct.MergeSorted.html " "
//! [`ListStorage`]: storage/trait.ListStorage.html " "
//! [`CapacityError`]: struct.CapacityError.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{ListStorage, DefaultStorage};

pub mod song;
pub use song::{BottlesOfBeer, bottles_of_beer};

pub mod fibonacci;
pub use fibonacci::{Fibonacci, CheckedFibonacci, fibonacci, checked_fibonacci};

pub mod tree;
pub use tree::Traversable;
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub use tree::Node;

pub mod traversal;
pub use traversal::{DepthFirst, BreadthFirst};

pub mod merge;
pub use merge::{MergeSorted, CheckedMergeSorted, merge_sorted, merge_sorted_by};

/// A prelude for using Ember, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::ListStorage as TraversalStorage;
    #[doc(no_inline)]
    pub use crate::tree::Traversable;
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    #[doc(no_inline)]
    pub use crate::tree::Node as TreeNode;
    #[doc(no_inline)]
    pub use crate::{
        song::{BottlesOfBeer, Line as SongLine},
        fibonacci::{Fibonacci, CheckedFibonacci},
        traversal::{DepthFirst, BreadthFirst},
        merge::{MergeSorted, CheckedMergeSorted, Source as MergeSource},
        bottles_of_beer,
        fibonacci,
        checked_fibonacci,
        merge_sorted,
        merge_sorted_by,
    };
}

pub(crate) mod util;

use thiserror::Error;
use merge::Source;

/// The error type returned by traversals when their fixed-capacity storage has no room for another pending node.
///
/// Growable storages, such as [`Vec`], never produce this error.
///
/// [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("traversal storage ran out of capacity ({capacity} elements)")]
pub struct CapacityError {
    /// The capacity of the storage which overflowed.
    pub capacity: usize,
}

/// The error type produced by [`CheckedMergeSorted`] when one of the sources turns out not to be sorted.
///
/// [`CheckedMergeSorted`]: merge/struct.CheckedMergeSorted.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{origin} merge source is not sorted: element {index} is less than its predecessor")]
pub struct UnsortedError {
    /// Which of the two sources yielded the offending element.
    pub origin: Source,
    /// The zero-based position of the offending element within its source.
    pub index: usize,
}
