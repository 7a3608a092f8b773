use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_keyword_resolves() {
    let interner = StringInterner::new();
    for kw in Keyword::ALL {
        assert_eq!(lookup(&interner, kw.as_str().as_bytes()), Some(kw));
        let name = interner.intern_str(kw.as_str());
        assert_eq!(classify(&interner, name), TokenKind::Keyword(kw));
    }
}

#[test]
fn near_misses_are_names() {
    let interner = StringInterner::new();
    for text in ["And", "ends", "whi", "nil_", "_if", "function1", ""] {
        assert_eq!(lookup(&interner, text.as_bytes()), None, "{text}");
        let name = interner.intern_str(text);
        assert_eq!(classify(&interner, name), TokenKind::Name(name));
    }
}
