//! Quoted string literals and their escape sequences.

use moon_ir::TokenKind;
use moon_lexer_core::CharSource;

use super::LexState;
use crate::lex_error::{LexError, LexErrorKind};

/// Maximum number of digits in a decimal escape.
const MAX_DECIMAL_DIGITS: usize = 3;

impl<S: CharSource> LexState<'_, S> {
    /// String delimited by `quote`; interns and pins the decoded content.
    pub(super) fn read_string(&mut self, quote: u8) -> Result<TokenKind, LexError> {
        self.save_and_next();
        while self.ch != Some(quote) {
            match self.ch {
                None => return Err(self.error_near_eos(LexErrorKind::UnfinishedString)),
                Some(b'\n' | b'\r') => {
                    return Err(self.error_near_buffer(LexErrorKind::UnfinishedString));
                }
                Some(b'\\') => self.read_escape()?,
                Some(_) => self.save_and_next(),
            }
        }
        self.save_and_next();
        let name = self.intern_literal(1)?;
        self.pins.pin(name);
        Ok(TokenKind::String(name))
    }

    fn read_escape(&mut self) -> Result<(), LexError> {
        self.next_char();
        let byte = match self.ch {
            Some(b'a') => 0x07,
            Some(b'b') => 0x08,
            Some(b'f') => 0x0C,
            Some(b'n') => b'\n',
            Some(b'r') => b'\r',
            Some(b't') => b'\t',
            Some(b'v') => 0x0B,
            Some(b'\n' | b'\r') => {
                self.save(b'\n');
                return self.inc_line();
            }
            // Reported as an unfinished string by the caller's loop.
            None => return Ok(()),
            Some(c) if c.is_ascii_digit() => return self.read_decimal_escape(),
            Some(_) => {
                self.save_and_next();
                return Ok(());
            }
        };
        self.save(byte);
        self.next_char();
        Ok(())
    }

    /// `\d`, `\dd` or `\ddd`, encoding one byte.
    fn read_decimal_escape(&mut self) -> Result<(), LexError> {
        let mut value = 0u32;
        for _ in 0..MAX_DECIMAL_DIGITS {
            match self.ch {
                Some(d) if d.is_ascii_digit() => {
                    value = value * 10 + u32::from(d - b'0');
                    self.next_char();
                }
                _ => break,
            }
        }
        match u8::try_from(value) {
            Ok(byte) => {
                self.save(byte);
                Ok(())
            }
            Err(_) => Err(self.error_near_buffer(LexErrorKind::EscapeTooLarge)),
        }
    }
}
