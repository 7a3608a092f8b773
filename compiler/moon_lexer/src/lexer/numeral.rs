//! Decimal numerals.
//!
//! ```text
//! numeral  = digits [ "." digits ] [ ("e" | "E") [ "+" | "-" ] digits ]
//! digits   = { "0"..."9" }
//! ```
//!
//! The scanner only collects the text; conversion decides whether it is
//! well formed, so `1e` and `1e+` are scanned and then rejected.

use moon_ir::TokenKind;
use moon_lexer_core::CharSource;

use super::LexState;
use crate::lex_error::{LexError, LexErrorKind};

/// Convert numeral text to a number. `None` when the text is malformed.
pub(super) fn parse_number(text: &[u8]) -> Option<f64> {
    std::str::from_utf8(text).ok()?.parse().ok()
}

impl<S: CharSource> LexState<'_, S> {
    /// Read a numeral. A leading `.` may already be in the buffer.
    pub(super) fn read_numeral(&mut self) -> Result<TokenKind, LexError> {
        self.save_digits();
        if self.ch == Some(b'.') {
            self.save_and_next();
            if self.ch == Some(b'.') {
                self.save_and_next();
                return Err(self.error_near_buffer(LexErrorKind::AmbiguousDecimalPoint));
            }
        }
        self.save_digits();
        if matches!(self.ch, Some(b'e' | b'E')) {
            self.save_and_next();
            if matches!(self.ch, Some(b'+' | b'-')) {
                self.save_and_next();
            }
            self.save_digits();
        }
        match parse_number(self.buffer.as_bytes()) {
            Some(value) => Ok(TokenKind::number(value)),
            None => Err(self.error_near_buffer(LexErrorKind::MalformedNumber)),
        }
    }

    fn save_digits(&mut self) {
        while matches!(self.ch, Some(c) if c.is_ascii_digit()) {
            self.save_and_next();
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
