//! Keyword resolution.
//!
//! The keyword table lives in the interner: every reserved spelling was
//! interned and marked when the interner was built, so classifying a
//! scanned identifier needs no string comparison at all.

use moon_ir::{Keyword, Name, StringInterner, TokenKind};

/// Classify an interned identifier as a reserved word or a plain name.
#[inline]
pub(crate) fn classify(interner: &StringInterner, name: Name) -> TokenKind {
    match interner.reserved(name) {
        Some(kw) => TokenKind::Keyword(kw),
        None => TokenKind::Name(name),
    }
}

/// Look up a spelling in the keyword table.
pub fn lookup(interner: &StringInterner, text: &[u8]) -> Option<Keyword> {
    interner.reserved(interner.intern(text))
}

#[cfg(test)]
mod tests;
