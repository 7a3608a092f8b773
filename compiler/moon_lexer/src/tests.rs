use super::*;
use moon_ir::Keyword;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn small_statement() {
    let interner = StringInterner::new();
    let tokens = lex(br#"if x==1 then return "a\nb" end"#, "=test", &interner).unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword(Keyword::If),
            TokenKind::Name(interner.intern_str("x")),
            TokenKind::Eq,
            TokenKind::number(1.0),
            TokenKind::Keyword(Keyword::Then),
            TokenKind::Keyword(Keyword::Return),
            TokenKind::String(interner.intern_str("a\nb")),
            TokenKind::Keyword(Keyword::End),
            TokenKind::Eos,
        ]
    );
    assert!(tokens.iter().all(|t| t.line == 1));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn oversized_chunks_are_rejected() {
    assert!(check_chunk_len(0, "=test").is_ok());
    assert!(check_chunk_len(u32::MAX as usize, "=test").is_ok());

    let err = check_chunk_len(u32::MAX as usize + 1, "=test").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ResourceLimit);
    assert_eq!(
        err.to_string(),
        format!(
            "test:1: too many bytes in a chunk (limit={}) near '<eof>'",
            u32::MAX
        )
    );
}

#[test]
fn token_codes_follow_the_reserved_range() {
    let interner = StringInterner::new();
    let tokens = lex(b"and while x .. ... == >= <= ~= 1 'a' +", "=test", &interner).unwrap();
    let codes: Vec<_> = tokens.iter().map(|t| t.kind.code()).collect();
    assert_eq!(
        codes,
        vec![257, 277, 278, 279, 280, 281, 282, 283, 284, 285, 286, 43, 287]
    );
}

#[test]
fn first_error_stops_the_chunk() {
    let interner = StringInterner::new();
    let err = lex(b"local s = 'open\nreturn s", "@main.moon", &interner).unwrap_err();
    assert_eq!(err.chunk, "main.moon");
    assert_eq!(err.line, 1);
    assert_eq!(err.to_string(), "main.moon:1: unfinished string near ''open'");
}

#[test]
fn string_chunks_are_named_by_their_text() {
    let interner = StringInterner::new();
    let err = lex(b"x = 3..4", "x = 3..4", &interner).unwrap_err();
    assert_eq!(err.chunk, "[string \"x = 3..4\"]");
}

#[test]
fn keyword_lookup() {
    let interner = StringInterner::new();
    assert_eq!(lookup_keyword(&interner, b"repeat"), Some(Keyword::Repeat));
    assert_eq!(lookup_keyword(&interner, b"Repeat"), None);
}

proptest! {
    #[test]
    fn decimal_escape_matches_the_byte(byte in any::<u8>(), padded in any::<bool>()) {
        let interner = StringInterner::new();
        let escape = if padded { format!("'\\{byte:03}'") } else { format!("'\\{byte}'") };
        let tokens = lex(escape.as_bytes(), "=test", &interner).unwrap();
        let TokenKind::String(name) = tokens[0].kind else {
            panic!("expected a string, got {:?}", tokens[0].kind);
        };
        prop_assert_eq!(interner.lookup(name), &[byte][..]);
    }

    #[test]
    fn printable_strings_round_trip(text in "[a-zA-Z0-9 +*/(){}<>=~.,;:-]{0,40}") {
        let interner = StringInterner::new();
        let source = format!("\"{text}\"");
        let tokens = lex(source.as_bytes(), "=test", &interner).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::String(interner.intern_str(&text)));
        prop_assert_eq!(tokens.len(), 2);
    }
}
