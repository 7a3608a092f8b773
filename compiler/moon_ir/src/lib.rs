//! Moon IR - shared lexical vocabulary
//!
//! This crate contains the data structures the lexer hands to the parser:
//! - Spans for source locations
//! - Names for interned byte strings
//! - The keyword table and token kinds with their stable integer codes
//! - The per-unit retention set for pinned strings
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: byte strings → `Name(u32)`
//! - **Stable Codes**: every token kind maps to a fixed integer code, so
//!   tables indexed by token code never need rebuilding.
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod pin_set;
mod span;
mod token;

pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use pin_set::PinSet;
pub use span::Span;
pub use token::{
    token_spelling, Keyword, Token, TokenKind, FIRST_RESERVED, NUM_RESERVED, TK_CONCAT, TK_DOTS,
    TK_EOS, TK_EQ, TK_GE, TK_LE, TK_NAME, TK_NE, TK_NUMBER, TK_STRING,
};
