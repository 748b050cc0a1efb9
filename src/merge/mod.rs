//! Merging two sorted sequences into one.
//!
//! The merge pulls from its sources lazily, one element at a time, so either or both of them may be infinite.
//!
//! # Example
//! ```rust
//! use ember::merge_sorted;
//!
//! let odds = || (1..).step_by(2);
//! let evens = || (2..).step_by(2);
//!
//! let merged: Vec<i32> = merge_sorted(odds, evens).take(6).collect();
//! assert_eq!(merged, [1, 2, 3, 4, 5, 6]);
//!
//! // Finite sources are drained once the other one runs dry:
//! let merged: Vec<i32> = merge_sorted(|| vec![0], evens).take(4).collect();
//! assert_eq!(merged, [0, 2, 4, 6]);
//! ```
//!
//! # Ties
//! When the heads of both sources are equal, the element from the *second* source is emitted first: the first source only wins if its head is strictly less than the head of the second one. Both elements are kept, so the merge is a union of multisets rather than of sets.
//!
//! # Unsorted input
//! If a source is not sorted, the order of the output is unspecified, but every element still ends up in it exactly once. Use [`MergeSorted::checked`] to detect such input instead.
//!
//! [`MergeSorted::checked`]: struct.MergeSorted.html#method.checked " "

use core::{
    fmt::{self, Formatter, Debug, Display},
    iter::{Fuse, FusedIterator, Peekable},
};
use crate::UnsortedError;

#[cfg(all(test, feature = "alloc"))]
mod tests;

/// The ordering used by [`merge_sorted`] and [`MergeSorted::new`]: a plain function pointer comparing with `<`.
///
/// [`merge_sorted`]: fn.merge_sorted.html " "
/// [`MergeSorted::new`]: struct.MergeSorted.html#method.new " "
pub type NaturalOrder<T> = fn(&T, &T) -> bool;

#[inline]
fn less<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// Merges the sequences produced by two factories, comparing elements with `<`.
///
/// Each factory is called exactly once, right away. Since shared references to closures are closures themselves, the same factories can be passed by reference to create any number of independent merges.
///
/// See the [module-level documentation] for more.
///
/// # Example
/// ```rust
/// # use ember::merge_sorted;
/// let odds = || (1..).step_by(2);
/// let minus_one = || Some(-1);
///
/// let first: Vec<i32> = merge_sorted(&odds, &minus_one).take(3).collect();
/// let second: Vec<i32> = merge_sorted(&odds, &minus_one).take(3).collect();
/// assert_eq!(first, [-1, 1, 3]);
/// assert_eq!(first, second);
/// ```
///
/// [module-level documentation]: index.html " "
#[inline]
pub fn merge_sorted<F1, F2, I1, I2>(
    first: F1,
    second: F2,
) -> MergeSorted<I1::IntoIter, I2::IntoIter, NaturalOrder<I1::Item>>
where
    F1: FnOnce() -> I1,
    F2: FnOnce() -> I2,
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    I1::Item: PartialOrd,
{
    MergeSorted::new(first(), second())
}

/// Merges the sequences produced by two factories, using the specified "is less than" predicate to compare elements.
///
/// The sources must be sorted according to the same predicate. Ties are broken the same way as with [`merge_sorted`]: the first source only wins if `is_less(first_head, second_head)` is `true`.
///
/// # Example
/// ```rust
/// # use ember::merge_sorted_by;
/// // Both sources are sorted in descending order:
/// let merged: Vec<u8> = merge_sorted_by(
///     || vec![9, 5, 1],
///     || vec![8, 5, 2],
///     |a, b| a > b,
/// ).collect();
/// assert_eq!(merged, [9, 8, 5, 5, 2, 1]);
/// ```
///
/// [`merge_sorted`]: fn.merge_sorted.html " "
#[inline]
pub fn merge_sorted_by<F1, F2, I1, I2, F>(
    first: F1,
    second: F2,
    is_less: F,
) -> MergeSorted<I1::IntoIter, I2::IntoIter, F>
where
    F1: FnOnce() -> I1,
    F2: FnOnce() -> I2,
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    F: FnMut(&I1::Item, &I1::Item) -> bool,
{
    MergeSorted::new_by(first(), second(), is_less)
}

/// Identifies one of the two sources of a merge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// The source passed first.
    First,
    /// The source passed second.
    Second,
}
impl Display for Source {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::First => "first",
            Self::Second => "second",
        })
    }
}

/// The peeked heads of both sources, shared by the plain and the checked merge.
struct Heads<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    first: Peekable<Fuse<A>>,
    second: Peekable<Fuse<B>>,
    draining: bool,
}
impl<A, B> Heads<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    #[inline]
    fn new(first: A, second: B) -> Self {
        Self {
            first: first.fuse().peekable(),
            second: second.fuse().peekable(),
            draining: false,
        }
    }
    /// Decides which source the next element comes from, or returns `None` if both are exhausted.
    fn pick<F>(&mut self, is_less: &mut F) -> Option<Source>
    where
        F: FnMut(&A::Item, &A::Item) -> bool,
    {
        let (source, exhausted) = match (self.first.peek(), self.second.peek()) {
            (Some(a), Some(b)) => {
                // Not strictly less means the second source goes first, ties included.
                if is_less(a, b) {
                    (Source::First, None)
                } else {
                    (Source::Second, None)
                }
            }
            (Some(_), None) => (Source::First, Some(Source::Second)),
            (None, Some(_)) => (Source::Second, Some(Source::First)),
            (None, None) => return None,
        };
        if let Some(exhausted) = exhausted {
            if !self.draining {
                self.draining = true;
                tracing::trace!(
                    exhausted = %exhausted,
                    "merge source ran dry, draining the other one"
                );
            }
        }
        Some(source)
    }
    #[inline]
    fn take(&mut self, source: Source) -> Option<A::Item> {
        match source {
            Source::First => self.first.next(),
            Source::Second => self.second.next(),
        }
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.first.size_hint();
        let (second_lower, second_upper) = self.second.size_hint();
        let upper = match (first_upper, second_upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (first_lower.saturating_add(second_lower), upper)
    }
}
impl<A, B> Clone for Heads<A, B>
where
    A: Iterator + Clone,
    B: Iterator<Item = A::Item> + Clone,
    A::Item: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            draining: self.draining,
        }
    }
}
impl<A, B> Debug for Heads<A, B>
where
    A: Iterator + Debug,
    B: Iterator<Item = A::Item> + Debug,
    A::Item: Debug,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heads")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("draining", &self.draining)
            .finish()
    }
}

/// An iterator over the sorted union of two sorted sequences.
///
/// Created by [`merge_sorted`], [`merge_sorted_by`], [`new`] or [`new_by`]. See the [module-level documentation] for more.
///
/// [`merge_sorted`]: fn.merge_sorted.html " "
/// [`merge_sorted_by`]: fn.merge_sorted_by.html " "
/// [`new`]: #method.new " "
/// [`new_by`]: #method.new_by " "
/// [module-level documentation]: index.html " "
pub struct MergeSorted<A, B, F>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    heads: Heads<A, B>,
    is_less: F,
}
impl<A, B> MergeSorted<A, B, NaturalOrder<A::Item>>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    A::Item: PartialOrd,
{
    /// Merges two ready sequences, comparing elements with `<`.
    ///
    /// # Example
    /// ```rust
    /// # use ember::MergeSorted;
    /// let merged: Vec<_> = MergeSorted::new(vec![1, 1, 4], vec![1, 2]).collect();
    /// assert_eq!(merged, [1, 1, 1, 2, 4]);
    /// ```
    #[inline]
    pub fn new<I, J>(first: I, second: J) -> Self
    where
        I: IntoIterator<IntoIter = A, Item = A::Item>,
        J: IntoIterator<IntoIter = B, Item = A::Item>,
    {
        Self::new_by(first, second, less::<A::Item> as NaturalOrder<A::Item>)
    }
}
impl<A, B, F> MergeSorted<A, B, F>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    /// Merges two ready sequences, using the specified "is less than" predicate to compare elements.
    #[inline]
    pub fn new_by<I, J>(first: I, second: J, is_less: F) -> Self
    where
        I: IntoIterator<IntoIter = A, Item = A::Item>,
        J: IntoIterator<IntoIter = B, Item = A::Item>,
    {
        Self {
            heads: Heads::new(first.into_iter(), second.into_iter()),
            is_less,
        }
    }
    /// Converts the merge into one which validates the order of both sources as it goes, yielding an error instead of the first out-of-order element.
    ///
    /// # Example
    /// ```rust
    /// # use ember::{MergeSorted, UnsortedError, merge::Source};
    /// let mut merged = MergeSorted::new(vec![1, 3, 2], vec![0]).checked();
    /// assert_eq!(merged.next(), Some(Ok(0)));
    /// assert_eq!(merged.next(), Some(Ok(1)));
    /// assert_eq!(merged.next(), Some(Ok(3)));
    /// assert_eq!(
    ///     merged.next(),
    ///     Some(Err(UnsortedError { origin: Source::First, index: 2 })),
    /// );
    /// assert_eq!(merged.next(), None);
    /// ```
    #[inline]
    pub fn checked(self) -> CheckedMergeSorted<A, B, F>
    where
        A::Item: Clone,
    {
        CheckedMergeSorted {
            heads: self.heads,
            is_less: self.is_less,
            last_first: None,
            last_second: None,
            taken_first: 0,
            taken_second: 0,
            failed: false,
        }
    }
}
impl<A, B, F> Iterator for MergeSorted<A, B, F>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        let source = self.heads.pick(&mut self.is_less)?;
        self.heads.take(source)
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heads.size_hint()
    }
}
impl<A, B, F> FusedIterator for MergeSorted<A, B, F>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
}
impl<A, B, F> Clone for MergeSorted<A, B, F>
where
    A: Iterator + Clone,
    B: Iterator<Item = A::Item> + Clone,
    A::Item: Clone,
    F: FnMut(&A::Item, &A::Item) -> bool + Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            heads: self.heads.clone(),
            is_less: self.is_less.clone(),
        }
    }
}
impl<A, B, F> Debug for MergeSorted<A, B, F>
where
    A: Iterator + Debug,
    B: Iterator<Item = A::Item> + Debug,
    A::Item: Debug,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeSorted")
            .field("heads", &self.heads)
            .finish()
    }
}

/// A merge which checks that both of its sources are sorted.
///
/// Every element is yielded as `Ok`. As soon as a source yields an element which is less than the previous element from the same source, the merge yields an [`UnsortedError`] pointing at it and ends.
///
/// Created by [`MergeSorted::checked`].
///
/// [`UnsortedError`]: ../struct.UnsortedError.html " "
/// [`MergeSorted::checked`]: struct.MergeSorted.html#method.checked " "
pub struct CheckedMergeSorted<A, B, F>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    A::Item: Clone,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    heads: Heads<A, B>,
    is_less: F,
    last_first: Option<A::Item>,
    last_second: Option<A::Item>,
    taken_first: usize,
    taken_second: usize,
    failed: bool,
}
impl<A, B, F> Iterator for CheckedMergeSorted<A, B, F>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    A::Item: Clone,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    type Item = Result<A::Item, UnsortedError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let source = self.heads.pick(&mut self.is_less)?;
        let item = self.heads.take(source)?;
        let (last, taken) = match source {
            Source::First => (&mut self.last_first, &mut self.taken_first),
            Source::Second => (&mut self.last_second, &mut self.taken_second),
        };
        if let Some(previous) = last {
            if (self.is_less)(&item, previous) {
                self.failed = true;
                tracing::debug!(
                    origin = %source,
                    index = *taken,
                    "merge source is not sorted"
                );
                return Some(Err(UnsortedError {
                    origin: source,
                    index: *taken,
                }));
            }
        }
        *last = Some(item.clone());
        *taken += 1;
        Some(Ok(item))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            // An error may cut the sequence short at any point.
            (0, self.heads.size_hint().1)
        }
    }
}
impl<A, B, F> FusedIterator for CheckedMergeSorted<A, B, F>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    A::Item: Clone,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
}
impl<A, B, F> Debug for CheckedMergeSorted<A, B, F>
where
    A: Iterator + Debug,
    B: Iterator<Item = A::Item> + Debug,
    A::Item: Clone + Debug,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckedMergeSorted")
            .field("heads", &self.heads)
            .field("last_first", &self.last_first)
            .field("last_second", &self.last_second)
            .field("taken_first", &self.taken_first)
            .field("taken_second", &self.taken_second)
            .field("failed", &self.failed)
            .finish()
    }
}
