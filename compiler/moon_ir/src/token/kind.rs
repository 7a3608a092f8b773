//! Token kinds.

use std::borrow::Cow;
use std::fmt;

use super::{
    token_spelling, Keyword, TK_CONCAT, TK_DOTS, TK_EOS, TK_EQ, TK_GE, TK_LE, TK_NAME, TK_NE,
    TK_NUMBER, TK_STRING,
};
use crate::Name;

/// Token kinds.
///
/// Float literals store bits as u64 so the type stays `Eq + Hash`.
/// Names and strings carry the interned reference; for strings that is the
/// decoded contents, not the source spelling.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Any byte not otherwise classified, used verbatim: `+`, `(`, `[`, ...
    Char(u8),
    /// Reserved word.
    Keyword(Keyword),
    /// `..`
    Concat,
    /// `...`
    Dots,
    /// `==`
    Eq,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `~=`
    Ne,
    /// Identifier (interned spelling).
    Name(Name),
    /// String literal (interned decoded contents).
    String(Name),
    /// Numeric literal (f64 bits).
    Number(u64),
    /// End of input.
    Eos,
}

impl TokenKind {
    /// Build a `Number` token from its value.
    #[inline]
    pub fn number(value: f64) -> Self {
        TokenKind::Number(value.to_bits())
    }

    /// The numeric value of a `Number` token.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenKind::Number(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// Stable integer code of this kind.
    pub fn code(&self) -> u16 {
        match self {
            TokenKind::Char(c) => u16::from(*c),
            TokenKind::Keyword(kw) => kw.code(),
            TokenKind::Concat => TK_CONCAT,
            TokenKind::Dots => TK_DOTS,
            TokenKind::Eq => TK_EQ,
            TokenKind::Ge => TK_GE,
            TokenKind::Le => TK_LE,
            TokenKind::Ne => TK_NE,
            TokenKind::Name(_) => TK_NAME,
            TokenKind::String(_) => TK_STRING,
            TokenKind::Number(_) => TK_NUMBER,
            TokenKind::Eos => TK_EOS,
        }
    }

    /// Canonical spelling of the kind, without its payload.
    ///
    /// Literal kinds render as their placeholder (`*name`, `*number`,
    /// `*string`); use the lexer's `token_text` to show the payload.
    pub fn spelling(&self) -> Cow<'static, str> {
        token_spelling(self.code()).unwrap_or(Cow::Borrowed("?"))
    }

    /// Returns `true` for tokens that carry a semantic payload.
    pub fn has_payload(&self) -> bool {
        matches!(
            self,
            TokenKind::Name(_) | TokenKind::String(_) | TokenKind::Number(_)
        )
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Char(c) => {
                let spelling = token_spelling(u16::from(*c)).unwrap_or_default();
                write!(f, "Char({spelling})")
            }
            TokenKind::Keyword(kw) => write!(f, "Keyword({kw})"),
            TokenKind::Name(name) => write!(f, "Name({name:?})"),
            TokenKind::String(name) => write!(f, "String({name:?})"),
            TokenKind::Number(bits) => write!(f, "Number({})", f64::from_bits(*bits)),
            TokenKind::Concat => f.write_str("Concat"),
            TokenKind::Dots => f.write_str("Dots"),
            TokenKind::Eq => f.write_str("Eq"),
            TokenKind::Ge => f.write_str("Ge"),
            TokenKind::Le => f.write_str("Le"),
            TokenKind::Ne => f.write_str("Ne"),
            TokenKind::Eos => f.write_str("Eos"),
        }
    }
}
