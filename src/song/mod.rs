//! The lyrics of "99 Bottles of Beer", produced line by line.
//!
//! # Example
//! ```rust
//! use ember::song::{BottlesOfBeer, Line};
//!
//! let mut song = BottlesOfBeer::new();
//! // The song is finite and its length is known in advance:
//! assert_eq!(song.len(), 200);
//!
//! // Lines can be compared with text directly, without allocating:
//! assert_eq!(song.next().unwrap(), "99 bottles of beer on the wall, 99 bottles of beer.");
//! assert_eq!(
//!     song.next().unwrap(),
//!     "Take one down and pass it around, 98 bottles of beer on the wall.",
//! );
//!
//! // Iterating from the back is just as cheap:
//! assert_eq!(song.next_back(), Some(Line::Restock(99)));
//! ```

use core::{
    fmt::{self, Formatter, Display},
    iter::FusedIterator,
    num::NonZeroU32,
};
use crate::util::display_eq;


/// The number of bottles the song traditionally starts with.
pub const TRADITIONAL_COUNT: u32 = 99;

/// Returns the lines of the traditional song, starting at 99 bottles.
///
/// Each call returns a fresh, independent iterator.
#[inline(always)]
pub fn bottles_of_beer() -> BottlesOfBeer {
    BottlesOfBeer::new()
}

/// A single line of the song.
///
/// Lines are small values which render themselves through [`Display`]. They compare equal to a string holding exactly their rendered text.
///
/// [`Display`]: https://doc.rust-lang.org/std/fmt/trait.Display.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    /// The first line of a verse, e.g. "2 bottles of beer on the wall, 2 bottles of beer." Holds the number of bottles on the wall, which is zero for the final verse.
    Verse(u32),
    /// The second line of a verse, e.g. "Take one down and pass it around, 1 bottle of beer on the wall." Holds the number of bottles left afterwards.
    TakeOneDown(u32),
    /// The very last line of the song, which brings the count back to the starting number held here.
    Restock(u32),
}
impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Verse(0) => f.write_str(
                "No more bottles of beer on the wall, no more bottles of beer.",
            ),
            Self::Verse(n) => write!(
                f,
                "{} of beer on the wall, {} of beer.",
                Bottles(n),
                Bottles(n),
            ),
            Self::TakeOneDown(left) => write!(
                f,
                "Take one down and pass it around, {} of beer on the wall.",
                Bottles(left),
            ),
            Self::Restock(count) => write!(
                f,
                "Go to the store and buy some more, {} of beer on the wall.",
                Bottles(count),
            ),
        }
    }
}
impl PartialEq<str> for Line {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        display_eq(self, other)
    }
}
impl PartialEq<&str> for Line {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        display_eq(self, other)
    }
}
impl PartialEq<Line> for str {
    #[inline]
    fn eq(&self, other: &Line) -> bool {
        display_eq(other, self)
    }
}
impl PartialEq<Line> for &str {
    #[inline]
    fn eq(&self, other: &Line) -> bool {
        display_eq(other, self)
    }
}

/// Grammatically correct "N bottles" phrase.
#[derive(Copy, Clone, Debug)]
struct Bottles(u32);
impl Display for Bottles {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("no more bottles"),
            1 => f.write_str("1 bottle"),
            n => write!(f, "{} bottles", n),
        }
    }
}

/// An iterator over the lines of the song.
///
/// The song starting at `count` bottles has `2 * count + 2` lines: two for every verse from `count` down to and including the "no more bottles" one, except that the final verse is followed by the [`Restock`] line instead of a [`TakeOneDown`] one.
///
/// Lines are computed from their position alone, which is what makes the iterator double-ended and exactly sized.
///
/// [`Restock`]: enum.Line.html#variant.Restock " "
/// [`TakeOneDown`]: enum.Line.html#variant.TakeOneDown " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_copy_implementations)]
pub struct BottlesOfBeer {
    count: u32,
    front: usize,
    back: usize,
}
impl BottlesOfBeer {
    /// Creates an iterator over the traditional song, starting at 99 bottles.
    #[inline(always)]
    pub const fn new() -> Self {
        Self::from_count(TRADITIONAL_COUNT)
    }
    /// Creates an iterator over the song starting at the specified number of bottles.
    ///
    /// # Example
    /// ```rust
    /// # use ember::song::BottlesOfBeer;
    /// use core::num::NonZeroU32;
    ///
    /// let song = BottlesOfBeer::with_count(NonZeroU32::new(1).unwrap());
    /// let lines: Vec<_> = song.into_strings().collect();
    /// assert_eq!(lines, [
    ///     "1 bottle of beer on the wall, 1 bottle of beer.",
    ///     "Take one down and pass it around, no more bottles of beer on the wall.",
    ///     "No more bottles of beer on the wall, no more bottles of beer.",
    ///     "Go to the store and buy some more, 1 bottle of beer on the wall.",
    /// ]);
    /// ```
    #[inline(always)]
    pub const fn with_count(count: NonZeroU32) -> Self {
        Self::from_count(count.get())
    }
    #[inline(always)]
    const fn from_count(count: u32) -> Self {
        Self {
            count,
            front: 0,
            back: 2 * count as usize + 2,
        }
    }
    /// Returns the number of bottles the song starts (and ends) with.
    ///
    /// Not to be confused with [`Iterator::count`], which consumes the iterator and returns the number of remaining lines.
    ///
    /// [`Iterator::count`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.count " "
    #[inline(always)]
    pub const fn bottles(&self) -> u32 {
        self.count
    }
    /// Converts the iterator into one which produces owned strings instead of [`Line`]s.
    ///
    /// [`Line`]: enum.Line.html " "
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    #[inline]
    pub fn into_strings(
        self,
    ) -> impl DoubleEndedIterator<Item = alloc::string::String> + ExactSizeIterator + FusedIterator {
        use alloc::string::ToString;
        self.map(|line| line.to_string())
    }
    /// Computes the line at the specified position of the full song.
    fn line_at(&self, position: usize) -> Line {
        let total = 2 * self.count as usize + 2;
        if position + 1 == total {
            return Line::Restock(self.count);
        }
        // The verse number never exceeds the count, which is a `u32`.
        #[allow(clippy::cast_possible_truncation)]
        let bottles = self.count - (position / 2) as u32;
        if position % 2 == 0 {
            Line::Verse(bottles)
        } else {
            Line::TakeOneDown(bottles - 1)
        }
    }
}
impl Default for BottlesOfBeer {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl Iterator for BottlesOfBeer {
    type Item = Line;

    #[inline]
    fn next(&mut self) -> Option<Line> {
        if self.front == self.back {
            return None;
        }
        let line = self.line_at(self.front);
        self.front += 1;
        Some(line)
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
    #[inline]
    fn nth(&mut self, n: usize) -> Option<Line> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}
impl DoubleEndedIterator for BottlesOfBeer {
    #[inline]
    fn next_back(&mut self) -> Option<Line> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.line_at(self.back))
    }
}
impl ExactSizeIterator for BottlesOfBeer {}
impl FusedIterator for BottlesOfBeer {}
