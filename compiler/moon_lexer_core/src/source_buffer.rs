//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so a [`Cursor`] can read its current byte without checking the length
//! first. The total buffer size is rounded up to the next 64-byte boundary
//! for cache-line alignment, which also provides safe padding for reads at the sentinel.
//!
//! Chunks are raw bytes. A `0x00` inside the content is an ordinary
//! character; the cursor tells it apart from the sentinel by position.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from a chunk.
    ///
    /// # File Size
    ///
    /// Chunks larger than `u32::MAX` bytes (~4 GiB) are truncated to the
    /// first `u32::MAX` bytes; the scanner treats the cut as end of input.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let bytes = source.as_ref();
        let source_len_u32 = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let source_len = source_len_u32 as usize;

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(&bytes[..source_len]);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Size assertion: Vec<u8> = 24, u32 = 4, + 4 padding = 32.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);
