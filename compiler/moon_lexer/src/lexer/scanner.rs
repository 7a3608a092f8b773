//! Token dispatch, character fetching, newlines, comments and names.

use moon_ir::{Span, Token, TokenKind};
use moon_lexer_core::CharSource;

use super::long_bracket::Sep;
use super::LexState;
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};

/// Whitespace other than the two newline characters.
#[inline]
pub(super) fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | 0x0B | 0x0C)
}

#[inline]
pub(super) fn is_newline(c: Option<u8>) -> bool {
    matches!(c, Some(b'\n' | b'\r'))
}

#[inline]
fn is_name_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

impl<S: CharSource> LexState<'_, S> {
    /// Move to the next character. A no-op once input has ended.
    #[inline]
    pub(super) fn next_char(&mut self) {
        if self.ch.is_some() {
            self.pos = self.pos.saturating_add(1);
            self.ch = self.source.next_char();
        }
    }

    #[inline]
    pub(super) fn save(&mut self, c: u8) {
        self.buffer.save(c);
    }

    #[inline]
    pub(super) fn save_and_next(&mut self) {
        if let Some(c) = self.ch {
            self.buffer.save(c);
        }
        self.next_char();
    }

    /// Consume one logical newline: `\n`, `\r`, `\r\n` or `\n\r`.
    pub(super) fn inc_line(&mut self) -> Result<(), LexError> {
        let first = self.ch;
        debug_assert!(is_newline(first));
        self.next_char();
        if is_newline(self.ch) && self.ch != first {
            self.next_char();
        }
        self.line = self.line.saturating_add(1);
        self.check_limit(self.line, self.config.max_lines, "lines in a chunk")
    }

    /// Scan the next token, skipping whitespace, newlines and comments.
    pub(super) fn scan(&mut self) -> Result<Token, LexError> {
        self.buffer.reset();
        self.buffered = Span::DUMMY;
        loop {
            let start = self.pos;
            let kind = match self.ch {
                Some(b'\n' | b'\r') => {
                    self.inc_line()?;
                    continue;
                }
                Some(b'-') => {
                    self.next_char();
                    if self.ch == Some(b'-') {
                        self.skip_comment()?;
                        continue;
                    }
                    TokenKind::Char(b'-')
                }
                Some(b'[') => match self.skip_sep() {
                    Sep::Level(level) => self.read_long_string(level)?,
                    Sep::Absent => TokenKind::Char(b'['),
                    Sep::Malformed(_) => {
                        return Err(self.error_near_buffer(LexErrorKind::InvalidLongDelimiter));
                    }
                },
                Some(b'=') => self.pair_with_eq(b'=', TokenKind::Eq),
                Some(b'<') => self.pair_with_eq(b'<', TokenKind::Le),
                Some(b'>') => self.pair_with_eq(b'>', TokenKind::Ge),
                Some(b'~') => self.pair_with_eq(b'~', TokenKind::Ne),
                Some(quote @ (b'"' | b'\'')) => self.read_string(quote)?,
                Some(b'.') => self.dot()?,
                None => TokenKind::Eos,
                Some(c) if is_space(c) => {
                    self.next_char();
                    continue;
                }
                Some(c) if c.is_ascii_digit() => self.read_numeral()?,
                Some(c) if c.is_ascii_alphabetic() || c == b'_' => self.read_name()?,
                Some(c) => {
                    self.next_char();
                    TokenKind::Char(c)
                }
            };
            let token = Token::new(kind, Span::new(start, self.pos), self.line);
            if kind.has_payload() {
                self.buffered = token.span;
            }
            return Ok(token);
        }
    }

    /// `c` alone, or `paired` when `c` is followed by `=`.
    fn pair_with_eq(&mut self, c: u8, paired: TokenKind) -> TokenKind {
        self.next_char();
        if self.ch == Some(b'=') {
            self.next_char();
            paired
        } else {
            TokenKind::Char(c)
        }
    }

    /// `.`, `..`, `...` or a numeral with no integer part.
    fn dot(&mut self) -> Result<TokenKind, LexError> {
        self.save_and_next();
        match self.ch {
            Some(b'.') => {
                self.next_char();
                if self.ch == Some(b'.') {
                    self.next_char();
                    Ok(TokenKind::Dots)
                } else {
                    Ok(TokenKind::Concat)
                }
            }
            Some(c) if c.is_ascii_digit() => self.read_numeral(),
            _ => Ok(TokenKind::Char(b'.')),
        }
    }

    /// Skip a comment; the current character is its second `-`.
    fn skip_comment(&mut self) -> Result<(), LexError> {
        self.next_char();
        if self.ch == Some(b'[') {
            let sep = self.skip_sep();
            self.buffer.reset();
            if let Sep::Level(level) = sep {
                self.skip_long_comment(level)?;
                self.buffer.reset();
                return Ok(());
            }
        }
        self.skip_to_line_end();
        Ok(())
    }

    /// Leave the current character on the next newline or end of input.
    fn skip_to_line_end(&mut self) {
        if self.ch.is_none() || is_newline(self.ch) {
            return;
        }
        let (consumed, stop) = self.source.skip_line();
        let consumed = u32::try_from(consumed).unwrap_or(u32::MAX);
        self.pos = self.pos.saturating_add(consumed);
        if stop.is_none() {
            // The skipped run ended at input end, one past its last byte.
            self.pos = self.pos.saturating_add(1);
        }
        self.ch = stop;
    }

    /// Identifier or reserved word. Plain names are pinned for the unit.
    fn read_name(&mut self) -> Result<TokenKind, LexError> {
        while matches!(self.ch, Some(c) if is_name_char(c)) {
            self.save_and_next();
        }
        let name = self.intern_literal(0)?;
        let kind = keywords::classify(self.interner, name);
        if let TokenKind::Name(name) = kind {
            self.pins.pin(name);
        }
        Ok(kind)
    }
}
