//! Moon lexer - tokens from a stream of source bytes.
//!
//! The parser drives a [`LexState`] one token at a time:
//!
//! - [`LexState::advance`] consumes the next token;
//! - [`LexState::peek_lookahead`] scans one token ahead without consuming it;
//! - [`LexState::syntax_error`] builds a positioned error for the parser.
//!
//! Every lexical error is fatal for the unit and comes back as a
//! [`LexError`] from the call that detected it.
//!
//! Identifiers and string literals are interned through a shared
//! [`StringInterner`]; each unit pins the strings it produced in its own
//! [`PinSet`](moon_ir::PinSet), handed back by [`LexState::into_pins`].
//!
//! # Example
//!
//! ```
//! use moon_ir::{Keyword, StringInterner, TokenKind};
//!
//! let interner = StringInterner::new();
//! let tokens = moon_lexer::lex(b"return x", "=demo", &interner).unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Return));
//! assert_eq!(tokens[2].kind, TokenKind::Eos);
//! ```

mod chunk_id;
mod config;
mod keywords;
mod lex_error;
mod lexer;
mod literal_buffer;

pub use chunk_id::chunk_id;
pub use config::{LexerConfig, CHUNK_ID_WIDTH, MAX_LINES, MIN_BUFFER_GROWTH};
pub use keywords::lookup as lookup_keyword;
pub use lex_error::{ErrorCategory, LexError, LexErrorKind};
pub use lexer::LexState;
pub use literal_buffer::LiteralBuffer;

use moon_ir::{StringInterner, Token, TokenKind};
use moon_lexer_core::SourceBuffer;

/// Tokenize an in-memory chunk, end-of-input token included.
///
/// Offsets are `u32`, so a chunk longer than `u32::MAX` bytes is rejected
/// before scanning.
#[tracing::instrument(level = "debug", skip(source, interner), fields(len = source.len()))]
pub fn lex(
    source: &[u8],
    chunk_name: &str,
    interner: &StringInterner,
) -> Result<Vec<Token>, LexError> {
    check_chunk_len(source.len(), chunk_name)?;
    let buffer = SourceBuffer::new(source);
    let mut lexer = LexState::new(chunk_name, buffer.cursor(), interner);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.advance()?;
        tokens.push(token);
        if token.kind == TokenKind::Eos {
            return Ok(tokens);
        }
    }
}

fn check_chunk_len(len: usize, chunk_name: &str) -> Result<(), LexError> {
    if u32::try_from(len).is_ok() {
        return Ok(());
    }
    tracing::warn!(len, "chunk too large to scan");
    Err(LexError::new(
        LexErrorKind::TooMany {
            what: "bytes in a chunk",
            limit: u32::MAX,
        },
        chunk_id(chunk_name, CHUNK_ID_WIDTH),
        1,
        TokenKind::Eos.spelling(),
    ))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
