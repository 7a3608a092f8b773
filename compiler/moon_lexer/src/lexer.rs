//! Lexer state and the parser-facing token API.
//!
//! A [`LexState`] is created per compilation unit. It owns the literal
//! buffer, the current token, the one-token lookahead slot and the unit's
//! retention set; it borrows the character source and the interner.
//!
//! ```text
//! parser ─ advance/peek_lookahead ─▶ LexState ─ scan ─▶ CharSource
//!                                       │
//!                                       └─ intern/pin ─▶ StringInterner, PinSet
//! ```
//!
//! The scanner itself is split by sub-grammar into child modules:
//! [`scanner`] (dispatch, newlines, comments, names), [`long_bracket`],
//! [`short_string`] and [`numeral`].

mod long_bracket;
mod numeral;
mod scanner;
mod short_string;

use moon_ir::{InternError, Name, PinSet, Span, StringInterner, Token, TokenKind};
use moon_lexer_core::CharSource;

use crate::chunk_id::chunk_id;
use crate::config::LexerConfig;
use crate::lex_error::{LexError, LexErrorKind};
use crate::literal_buffer::LiteralBuffer;

/// Scanning state for one compilation unit.
pub struct LexState<'i, S> {
    source: S,
    interner: &'i StringInterner,
    config: LexerConfig,
    /// Current character; `None` is end of input.
    ch: Option<u8>,
    /// Byte offset of `ch` in the stream.
    pos: u32,
    /// Line counter, starting at 1.
    line: u32,
    /// Line of the last token consumed by [`advance`](Self::advance).
    last_line: u32,
    /// Source identifier as given by the caller.
    source_name: String,
    /// Display form of `source_name`, rendered once.
    chunk: String,
    buffer: LiteralBuffer,
    /// Span of the token whose raw text is in `buffer`.
    buffered: Span,
    pins: PinSet,
    token: Token,
    lookahead: Option<Token>,
}

impl<'i, S: CharSource> LexState<'i, S> {
    /// Create a lexer with the default configuration.
    ///
    /// Fetches exactly one character so that the scanner always has a
    /// current character to dispatch on.
    pub fn new(source_name: &str, source: S, interner: &'i StringInterner) -> Self {
        Self::with_config(source_name, source, interner, LexerConfig::default())
    }

    /// Create a lexer with explicit limits.
    pub fn with_config(
        source_name: &str,
        mut source: S,
        interner: &'i StringInterner,
        config: LexerConfig,
    ) -> Self {
        let ch = source.next_char();
        Self {
            source,
            interner,
            chunk: chunk_id(source_name, config.chunk_id_width),
            source_name: source_name.to_owned(),
            buffer: LiteralBuffer::with_min_growth(config.min_buffer_growth),
            config,
            ch,
            pos: 0,
            line: 1,
            last_line: 1,
            buffered: Span::DUMMY,
            pins: PinSet::new(),
            token: Token::dummy(TokenKind::Eos),
            lookahead: None,
        }
    }

    /// Consume the next token: the pending lookahead if there is one,
    /// otherwise a freshly scanned token.
    pub fn advance(&mut self) -> Result<Token, LexError> {
        self.last_line = self.line;
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.scan()?,
        };
        tracing::trace!(kind = ?token.kind, line = token.line, "token");
        self.token = token;
        Ok(token)
    }

    /// Scan one token past the current one without consuming it.
    ///
    /// Calling this again before the next [`advance`](Self::advance)
    /// returns the same token without scanning.
    pub fn peek_lookahead(&mut self) -> Result<Token, LexError> {
        if let Some(token) = self.lookahead {
            return Ok(token);
        }
        let token = self.scan()?;
        self.lookahead = Some(token);
        Ok(token)
    }
}

impl<S> LexState<'_, S> {
    /// The most recently consumed token.
    ///
    /// Before the first [`advance`](LexState::advance) this is a
    /// placeholder end-of-input token.
    #[inline]
    pub fn current(&self) -> Token {
        self.token
    }

    /// The pending lookahead token, if one has been scanned.
    #[inline]
    pub fn lookahead(&self) -> Option<Token> {
        self.lookahead
    }

    /// Current line counter.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Line counter as it was when the current token was consumed.
    #[inline]
    pub fn last_line(&self) -> u32 {
        self.last_line
    }

    /// Source identifier as given at construction.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Source identifier as shown in messages.
    pub fn chunk_name(&self) -> &str {
        &self.chunk
    }

    pub fn interner(&self) -> &StringInterner {
        self.interner
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub fn literal_buffer(&self) -> &LiteralBuffer {
        &self.buffer
    }

    /// Strings pinned by this unit so far.
    pub fn pins(&self) -> &PinSet {
        &self.pins
    }

    /// Finish the unit, handing its retention set to the caller.
    pub fn into_pins(self) -> PinSet {
        self.pins
    }

    /// Display text for `token`, as used after `near` in messages.
    ///
    /// Literal tokens show their source text while it is still in the
    /// literal buffer (i.e. for the most recently scanned token) and fall
    /// back to their decoded payload otherwise.
    pub fn token_text(&self, token: &Token) -> String {
        match token.kind {
            TokenKind::Name(_) | TokenKind::String(_) | TokenKind::Number(_)
                if token.span == self.buffered =>
            {
                self.buffer.to_display()
            }
            TokenKind::Name(name) | TokenKind::String(name) => self.name_text(name),
            TokenKind::Number(bits) => f64::from_bits(bits).to_string(),
            kind => kind.spelling().into_owned(),
        }
    }

    /// Syntax error at the current token and line.
    pub fn syntax_error(&self, message: impl Into<String>) -> LexError {
        let near = self.token_text(&self.token);
        self.raise(LexErrorKind::Syntax(message.into()), self.line, near)
    }

    /// Syntax error at `token`, attributed to an explicit line.
    pub fn error_at_line(&self, message: impl Into<String>, token: &Token, line: u32) -> LexError {
        let near = self.token_text(token);
        self.raise(LexErrorKind::Syntax(message.into()), line, near)
    }

    /// Fail with "too many `what`" when `value` exceeds `limit`.
    pub fn check_limit(&self, value: u32, limit: u32, what: &'static str) -> Result<(), LexError> {
        if value > limit {
            let near = self.token_text(&self.token);
            return Err(self.raise(LexErrorKind::TooMany { what, limit }, self.line, near));
        }
        Ok(())
    }

    /// Intern the literal buffer with `delimiter` bytes trimmed from each end.
    fn intern_literal(&self, delimiter: usize) -> Result<Name, LexError> {
        self.interner
            .try_intern(self.buffer.trimmed(delimiter))
            .map_err(|err| self.intern_error(&err))
    }

    /// A full interner shard is a resource limit like any other.
    fn intern_error(&self, err: &InternError) -> LexError {
        tracing::warn!(%err, "interner exhausted");
        match err {
            InternError::ShardOverflow { .. } => self.error_near_buffer(LexErrorKind::TooMany {
                what: "strings in the interner",
                limit: Name::MAX_LOCAL,
            }),
        }
    }

    fn name_text(&self, name: Name) -> String {
        self.interner.display(name).into_owned()
    }

    /// Error whose token text is the literal buffer.
    fn error_near_buffer(&self, kind: LexErrorKind) -> LexError {
        self.raise(kind, self.line, self.buffer.to_display())
    }

    /// Error reported at end of input.
    fn error_near_eos(&self, kind: LexErrorKind) -> LexError {
        self.raise(kind, self.line, TokenKind::Eos.spelling())
    }

    fn raise(&self, kind: LexErrorKind, line: u32, near: impl Into<String>) -> LexError {
        let err = LexError::new(kind, self.chunk.as_str(), line, near);
        tracing::debug!(%err, "lexical error");
        err
    }
}
