//! Lexical error types.
//!
//! Every lexical error is fatal for its compilation unit. A `LexError`
//! carries everything the final message needs, already rendered:
//!
//! ```text
//! <chunk>:<line>: <message> near '<token text>'
//! ```

use thiserror::Error;

/// A fatal lexical (or parser-raised syntax) error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{chunk}:{line}: {kind} near '{near}'")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Display form of the source identifier.
    pub chunk: String,
    /// Line active when the error was detected.
    pub line: u32,
    /// Text of the offending token.
    pub near: String,
}

impl LexError {
    pub fn new(
        kind: LexErrorKind,
        chunk: impl Into<String>,
        line: u32,
        near: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            chunk: chunk.into(),
            line,
            near: near.into(),
        }
    }

    /// Taxonomy bucket of the error.
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    // === Malformed literals ===
    /// Numeral text rejected by the number conversion.
    #[error("malformed number")]
    MalformedNumber,
    /// `3..4`: a decimal point immediately followed by another `.`.
    #[error("ambiguous syntax (decimal point x string concatenation)")]
    AmbiguousDecimalPoint,
    /// Decimal escape above 255.
    #[error("escape sequence too large")]
    EscapeTooLarge,

    // === Unterminated constructs ===
    /// Short string hit a raw newline or end of input.
    #[error("unfinished string")]
    UnfinishedString,
    /// Long string hit end of input.
    #[error("unfinished long string")]
    UnfinishedLongString,
    /// Long comment hit end of input.
    #[error("unfinished long comment")]
    UnfinishedLongComment,

    // === Malformed delimiters ===
    /// `[` followed by level markers but not a second `[`.
    #[error("invalid long string delimiter")]
    InvalidLongDelimiter,

    // === Resource limits ===
    /// A counted quantity exceeded its limit (e.g. lines in a chunk).
    #[error("too many {what} (limit={limit})")]
    TooMany { what: &'static str, limit: u32 },

    // === Raised by the parser ===
    /// Free-form syntax error reported through the lexer.
    #[error("{0}")]
    Syntax(String),
}

/// Error taxonomy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorCategory {
    MalformedLiteral,
    Unterminated,
    MalformedDelimiter,
    ResourceLimit,
    Syntax,
}

impl LexErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LexErrorKind::MalformedNumber
            | LexErrorKind::AmbiguousDecimalPoint
            | LexErrorKind::EscapeTooLarge => ErrorCategory::MalformedLiteral,
            LexErrorKind::UnfinishedString
            | LexErrorKind::UnfinishedLongString
            | LexErrorKind::UnfinishedLongComment => ErrorCategory::Unterminated,
            LexErrorKind::InvalidLongDelimiter => ErrorCategory::MalformedDelimiter,
            LexErrorKind::TooMany { .. } => ErrorCategory::ResourceLimit,
            LexErrorKind::Syntax(_) => ErrorCategory::Syntax,
        }
    }
}
