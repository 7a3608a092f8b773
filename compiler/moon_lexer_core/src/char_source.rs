//! The pull interface between a byte producer and the scanner.

/// A forward-only producer of source bytes.
///
/// Each call to [`next_char`](Self::next_char) hands out the next byte of the
/// chunk and advances past it. `None` is the end-of-input sentinel; once a
/// source has returned `None` it must keep returning `None`.
pub trait CharSource {
    /// Fetch the next byte, or `None` at end of input.
    fn next_char(&mut self) -> Option<u8>;

    /// Discard bytes up to and including the next `\n` or `\r`.
    ///
    /// Returns the number of bytes consumed (the stopping newline included)
    /// and the newline byte that stopped the skip, or `None` if input ended
    /// first. Sources with random access override this with a vectorized
    /// search.
    fn skip_line(&mut self) -> (usize, Option<u8>) {
        let mut consumed = 0;
        loop {
            match self.next_char() {
                Some(b @ (b'\n' | b'\r')) => return (consumed + 1, Some(b)),
                None => return (consumed, None),
                Some(_) => consumed += 1,
            }
        }
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    #[inline]
    fn next_char(&mut self) -> Option<u8> {
        (**self).next_char()
    }

    #[inline]
    fn skip_line(&mut self) -> (usize, Option<u8>) {
        (**self).skip_line()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    #[inline]
    fn next_char(&mut self) -> Option<u8> {
        (**self).next_char()
    }

    #[inline]
    fn skip_line(&mut self) -> (usize, Option<u8>) {
        (**self).skip_line()
    }
}
