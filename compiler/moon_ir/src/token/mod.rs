//! Token types for the Moon lexer.
//!
//! # Token codes
//!
//! Every token kind has a stable integer code:
//!
//! | codes | meaning |
//! |---|---|
//! | `0..=255` | single-character tokens, the byte itself |
//! | `FIRST_RESERVED..FIRST_RESERVED + NUM_RESERVED` | reserved words, in [`Keyword`] order |
//! | `TK_NAME..=TK_EOS` | names, operators, literals, end of input |

mod keyword;
mod kind;

pub use keyword::Keyword;
pub use kind::TokenKind;

use std::borrow::Cow;
use std::fmt;

use super::Span;

/// First code after the single-byte range.
pub const FIRST_RESERVED: u16 = 257;
/// Number of reserved words.
pub const NUM_RESERVED: u16 = Keyword::ALL.len() as u16;

pub const TK_NAME: u16 = FIRST_RESERVED + NUM_RESERVED;
pub const TK_CONCAT: u16 = TK_NAME + 1;
pub const TK_DOTS: u16 = TK_NAME + 2;
pub const TK_EQ: u16 = TK_NAME + 3;
pub const TK_GE: u16 = TK_NAME + 4;
pub const TK_LE: u16 = TK_NAME + 5;
pub const TK_NE: u16 = TK_NAME + 6;
pub const TK_NUMBER: u16 = TK_NAME + 7;
pub const TK_STRING: u16 = TK_NAME + 8;
pub const TK_EOS: u16 = TK_NAME + 9;

/// Spellings for every code from `FIRST_RESERVED` to `TK_EOS`.
const TOKEN_STRINGS: [&str; 31] = [
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while", "*name",
    "..", "...", "==", ">=", "<=", "~=", "*number", "*string", "<eof>",
];

/// Display spelling of a token code.
///
/// Control and non-ASCII bytes render as `char(N)`; other bytes render as
/// themselves. Returns `None` for codes outside the token range.
pub fn token_spelling(code: u16) -> Option<Cow<'static, str>> {
    match u8::try_from(code) {
        Ok(byte) if byte.is_ascii_control() || !byte.is_ascii() => {
            Some(Cow::Owned(format!("char({byte})")))
        }
        Ok(byte) => Some(Cow::Owned(char::from(byte).to_string())),
        Err(_) => code
            .checked_sub(FIRST_RESERVED)
            .and_then(|i| TOKEN_STRINGS.get(usize::from(i)))
            .map(|s| Cow::Borrowed(*s)),
    }
}

/// A token with its location.
///
/// `line` is the line counter at the moment the token was completed.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: u32) -> Self {
        Token { kind, span, line }
    }

    /// Create a dummy token for tests and synthesized input.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
            line: 1,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} (line {})", self.kind, self.span, self.line)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // Number(u64) payload + discriminant = 16 bytes
    crate::static_assert_size!(TokenKind, 16);
    // TokenKind (16) + Span (8) + line (4) + padding = 32 bytes
    crate::static_assert_size!(Token, 32);
}
