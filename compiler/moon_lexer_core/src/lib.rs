//! Character sources for the Moon lexer.
//!
//! The scanner pulls one byte at a time through the [`CharSource`] trait and
//! never looks further ahead than the byte it was handed last. Two sources
//! are provided:
//!
//! - [`SourceBuffer`] + [`Cursor`]: an in-memory chunk copied into a
//!   sentinel-terminated buffer. Skipping line comments uses `memchr`.
//! - [`ReadSource`]: a block-buffered adapter over any [`std::io::Read`],
//!   for chunks streamed from files or pipes.
//!
//! Bytes are not decoded: the lexer works on raw 8-bit code units, so any
//! byte value (including `0x00`) is a valid character. End of input is
//! signalled by `None`.

mod char_source;
mod cursor;
mod read_source;
mod source_buffer;

pub use char_source::CharSource;
pub use cursor::Cursor;
pub use read_source::ReadSource;
pub use source_buffer::SourceBuffer;
