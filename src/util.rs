use core::fmt::{self, Display, Write};

/// Checks whether the `Display` output of `value` is exactly `expected`, without allocating a buffer for the output.
pub(crate) fn display_eq(value: &impl Display, expected: &str) -> bool {
    let mut matcher = Matcher { rest: expected };
    // The formatter bails out with an error as soon as a chunk does not match.
    write!(matcher, "{}", value).is_ok() && matcher.rest.is_empty()
}

/// A `fmt::Write` sink which consumes the expected string chunk by chunk.
struct Matcher<'a> {
    rest: &'a str,
}
impl Write for Matcher<'_> {
    #[inline]
    fn write_str(&mut self, chunk: &str) -> fmt::Result {
        match self.rest.strip_prefix(chunk) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(fmt::Error),
        }
    }
}
