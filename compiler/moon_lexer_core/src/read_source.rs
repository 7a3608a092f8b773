//! Block-buffered character source over any [`Read`] implementation.
//!
//! Bytes are pulled from the reader one block at a time and handed out
//! individually. A read error ends the stream: the source reports end of
//! input and keeps the error for the caller to inspect with
//! [`ReadSource::take_error`], so a truncated file surfaces as an
//! "unfinished ..." lexical error rather than a panic.

use std::io::{self, Read};

use crate::CharSource;

/// Default refill block size.
const BLOCK_SIZE: usize = 8 * 1024;

/// Streaming [`CharSource`] backed by a reader.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    block: Box<[u8]>,
    /// Read position within `block[..filled]`.
    pos: usize,
    /// Number of valid bytes in `block`.
    filled: usize,
    /// Set once the reader reports EOF or fails.
    done: bool,
    error: Option<io::Error>,
}

impl<R: Read> ReadSource<R> {
    /// Wrap a reader using the default block size.
    pub fn new(reader: R) -> Self {
        Self::with_block_size(reader, BLOCK_SIZE)
    }

    /// Wrap a reader, refilling `block_size` bytes at a time (minimum 1).
    pub fn with_block_size(reader: R, block_size: usize) -> Self {
        Self {
            reader,
            block: vec![0; block_size.max(1)].into_boxed_slice(),
            pos: 0,
            filled: 0,
            done: false,
            error: None,
        }
    }

    /// Take the I/O error that ended the stream early, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Refill the block. Returns `false` once the stream is exhausted.
    fn refill(&mut self) -> bool {
        while !self.done {
            match self.reader.read(&mut self.block) {
                Ok(0) => self.done = true,
                Ok(n) => {
                    self.pos = 0;
                    self.filled = n;
                    return true;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.error = Some(e);
                    self.done = true;
                }
            }
        }
        false
    }
}

impl<R: Read> CharSource for ReadSource<R> {
    #[inline]
    fn next_char(&mut self) -> Option<u8> {
        if self.pos == self.filled && !self.refill() {
            return None;
        }
        let b = self.block[self.pos];
        self.pos += 1;
        Some(b)
    }

    fn skip_line(&mut self) -> (usize, Option<u8>) {
        let mut consumed = 0;
        loop {
            if self.pos == self.filled && !self.refill() {
                return (consumed, None);
            }
            let window = &self.block[self.pos..self.filled];
            if let Some(offset) = memchr::memchr2(b'\n', b'\r', window) {
                let b = window[offset];
                self.pos += offset + 1;
                return (consumed + offset + 1, Some(b));
            }
            consumed += window.len();
            self.pos = self.filled;
        }
    }
}

#[cfg(test)]
mod tests;
