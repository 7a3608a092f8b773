//! Scratch buffer for the raw text of the token being recognized.
//!
//! The buffer is reset (not freed) before every token, so after one long
//! literal its capacity stays put for the rest of the chunk. When full it
//! grows to twice its capacity plus a fixed minimum increment.

use crate::config::MIN_BUFFER_GROWTH;

/// Growable byte buffer shared by every sub-scanner of one lexer.
#[derive(Clone, Debug)]
pub struct LiteralBuffer {
    bytes: Vec<u8>,
    min_growth: usize,
}

impl LiteralBuffer {
    pub fn new() -> Self {
        Self::with_min_growth(MIN_BUFFER_GROWTH)
    }

    /// Create a buffer that grows by at least `min_growth` bytes at a time.
    pub fn with_min_growth(min_growth: usize) -> Self {
        Self {
            bytes: Vec::new(),
            min_growth: min_growth.max(1),
        }
    }

    /// Append one byte.
    #[inline]
    pub fn save(&mut self, byte: u8) {
        if self.bytes.len() == self.bytes.capacity() {
            let additional = self.bytes.capacity() + self.min_growth;
            self.bytes.reserve_exact(additional);
        }
        self.bytes.push(byte);
    }

    /// Forget the contents, keeping the allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Contents with `n` bytes trimmed from each end.
    ///
    /// Used to strip literal delimiters. Returns an empty slice when the
    /// buffer is shorter than both trims.
    pub fn trimmed(&self, n: usize) -> &[u8] {
        let len = self.bytes.len();
        if len < 2 * n {
            return &[];
        }
        &self.bytes[n..len - n]
    }

    /// Lossy UTF-8 rendering of the contents, for diagnostics.
    pub fn to_display(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

impl Default for LiteralBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
