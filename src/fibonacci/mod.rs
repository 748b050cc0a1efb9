//! The Fibonacci sequence as an infinite iterator.
//!
//! # Example
//! ```rust
//! use ember::fibonacci;
//!
//! let first_ten: Vec<u64> = fibonacci().take(10).collect();
//! assert_eq!(first_ten, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
//! ```
//!
//! The iterator never ends on its own, so the consumer has to bound it, with [`take`], [`take_while`] or similar adapters.
//!
//! # Overflow
//! Terms are added with the `Add` implementation of the element type. For primitive integers, this means that pulling a term which does not fit into the type panics in debug builds and wraps around in release builds. Only the term which is being returned is ever computed, so every representable term can be obtained safely: for `u64`, those are the first 94 terms, up to and including `F(93)`. Arbitrary precision integer types, such as `UBig` from the `ibig` crate, can be used to get past that.
//!
//! Alternatively, [`Fibonacci::checked`] (or [`checked_fibonacci`]) turns the sequence into one which ends after the last term representable by the element type instead of overflowing:
//! ```rust
//! use ember::fibonacci::checked_fibonacci;
//!
//! let all: Vec<u64> = checked_fibonacci().collect();
//! assert_eq!(all.len(), 94);
//! assert_eq!(all.last(), Some(&12_200_160_415_121_876_738));
//! ```
//!
//! [`take`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.take " "
//! [`take_while`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.take_while " "
//! [`Fibonacci::checked`]: struct.Fibonacci.html#method.checked " "
//! [`checked_fibonacci`]: fn.checked_fibonacci.html " "

use core::{
    iter::FusedIterator,
    ops::Add,
    mem,
};
use num_traits::CheckedAdd;

#[cfg(all(test, feature = "alloc"))]
mod tests;

/// Returns the Fibonacci sequence of `u64` values.
///
/// Each call returns a fresh iterator, starting from zero.
#[inline(always)]
pub fn fibonacci() -> Fibonacci<u64> {
    Fibonacci::new()
}

/// Returns the Fibonacci sequence of `u64` values, ending after `F(93)`, the last term which fits into a `u64`.
///
/// Each call returns a fresh iterator, starting from zero.
#[inline(always)]
pub fn checked_fibonacci() -> CheckedFibonacci<u64> {
    Fibonacci::new().checked()
}

/// An infinite iterator over the Fibonacci sequence: 0, 1, 1, 2, 3, 5, 8, 13, 21, 34, ...
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fibonacci<T = u64> {
    stage: Stage<T>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Stage<T> {
    Zero,
    One,
    /// The last two terms which were returned, older one first.
    Running(T, T),
}

impl<T> Fibonacci<T>
where
    T: Clone + Add<Output = T> + From<u8>,
{
    /// Creates an iterator starting at the first term, zero.
    #[inline(always)]
    pub const fn new() -> Self {
        Self { stage: Stage::Zero }
    }
}
impl<T> Fibonacci<T>
where
    T: Clone + CheckedAdd + From<u8>,
{
    /// Converts the iterator into one which ends instead of overflowing, resuming from the same term.
    #[inline(always)]
    pub fn checked(self) -> CheckedFibonacci<T> {
        CheckedFibonacci {
            stage: Some(self.stage),
        }
    }
}
impl<T> Default for Fibonacci<T>
where
    T: Clone + Add<Output = T> + From<u8>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T> Iterator for Fibonacci<T>
where
    T: Clone + Add<Output = T> + From<u8>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let (stage, term) = match mem::replace(&mut self.stage, Stage::Zero) {
            Stage::Zero => (Stage::One, T::from(0)),
            Stage::One => (Stage::Running(T::from(0), T::from(1)), T::from(1)),
            Stage::Running(older, newer) => {
                let sum = older + newer.clone();
                (Stage::Running(newer, sum.clone()), sum)
            }
        };
        self.stage = stage;
        Some(term)
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
impl<T> FusedIterator for Fibonacci<T> where T: Clone + Add<Output = T> + From<u8> {}

/// An iterator over the Fibonacci sequence which ends when the next term cannot be represented by the element type.
///
/// Created by [`Fibonacci::checked`] and [`checked_fibonacci`].
///
/// [`Fibonacci::checked`]: struct.Fibonacci.html#method.checked " "
/// [`checked_fibonacci`]: fn.checked_fibonacci.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CheckedFibonacci<T = u64> {
    stage: Option<Stage<T>>,
}
impl<T> Iterator for CheckedFibonacci<T>
where
    T: Clone + CheckedAdd + From<u8>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let (stage, term) = match self.stage.take()? {
            Stage::Zero => (Stage::One, T::from(0)),
            Stage::One => (Stage::Running(T::from(0), T::from(1)), T::from(1)),
            Stage::Running(older, newer) => {
                let sum = match older.checked_add(&newer) {
                    Some(sum) => sum,
                    None => {
                        tracing::debug!("next Fibonacci term does not fit into the element type, ending the sequence");
                        return None;
                    }
                };
                (Stage::Running(newer, sum.clone()), sum)
            }
        };
        self.stage = Some(stage);
        Some(term)
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.stage {
            Some(_) => (0, None),
            None => (0, Some(0)),
        }
    }
}
impl<T> FusedIterator for CheckedFibonacci<T> where T: Clone + CheckedAdd + From<u8> {}
