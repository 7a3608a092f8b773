//! Long brackets: `[[ ... ]]`, `[*[ ... ]*]` and so on.
//!
//! The number of `*` markers between the two bracket characters is the
//! level. A body ends at the first closer of its own level that is not
//! balanced by an earlier opener of the same level; brackets of any other
//! level are ordinary content.

use moon_ir::TokenKind;
use moon_lexer_core::CharSource;

use super::scanner::is_newline;
use super::LexState;
use crate::lex_error::{LexError, LexErrorKind};

/// Result of reading a bracket and its level markers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Sep {
    /// Well-formed bracket pair with this many markers.
    Level(u32),
    /// A lone bracket character.
    Absent,
    /// Markers not followed by the matching bracket character.
    Malformed(u32),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Body {
    String,
    Comment,
}

impl Body {
    fn unfinished(self) -> LexErrorKind {
        match self {
            Body::String => LexErrorKind::UnfinishedLongString,
            Body::Comment => LexErrorKind::UnfinishedLongComment,
        }
    }
}

impl<S: CharSource> LexState<'_, S> {
    /// Read a bracket character and any level markers after it.
    ///
    /// The current character must be `[` or `]`. On `Sep::Level` the
    /// second bracket is left as the current character.
    pub(super) fn skip_sep(&mut self) -> Sep {
        let bracket = self.ch;
        debug_assert!(matches!(bracket, Some(b'[' | b']')));
        self.save_and_next();
        let mut count = 0u32;
        while self.ch == Some(b'*') {
            self.save_and_next();
            count = count.saturating_add(1);
        }
        if self.ch == bracket {
            Sep::Level(count)
        } else if count == 0 {
            Sep::Absent
        } else {
            Sep::Malformed(count)
        }
    }

    /// Long string body; interns and pins the decoded content.
    pub(super) fn read_long_string(&mut self, level: u32) -> Result<TokenKind, LexError> {
        self.read_long_body(level, Body::String)?;
        let delimiter = level as usize + 2;
        let name = self.intern_literal(delimiter)?;
        self.pins.pin(name);
        Ok(TokenKind::String(name))
    }

    pub(super) fn skip_long_comment(&mut self, level: u32) -> Result<(), LexError> {
        self.read_long_body(level, Body::Comment)
    }

    fn read_long_body(&mut self, level: u32, body: Body) -> Result<(), LexError> {
        let mut depth = 0u32;
        self.save_and_next();
        if is_newline(self.ch) {
            self.inc_line()?;
        }
        loop {
            match self.ch {
                None => return Err(self.error_near_eos(body.unfinished())),
                Some(b'[') => {
                    if self.skip_sep() == Sep::Level(level) {
                        self.save_and_next();
                        depth = depth.saturating_add(1);
                    }
                }
                Some(b']') => {
                    if self.skip_sep() == Sep::Level(level) {
                        self.save_and_next();
                        if depth == 0 {
                            return Ok(());
                        }
                        depth -= 1;
                    }
                }
                Some(b'\n' | b'\r') => {
                    self.save(b'\n');
                    self.inc_line()?;
                    if body == Body::Comment {
                        self.buffer.reset();
                    }
                }
                Some(_) => match body {
                    Body::String => self.save_and_next(),
                    Body::Comment => self.next_char(),
                },
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
