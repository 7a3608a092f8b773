use super::*;
use crate::lex_error::ErrorCategory;
use moon_ir::{StringInterner, Token};
use moon_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

fn tokens(interner: &StringInterner, source: &str) -> Vec<Token> {
    crate::lex(source.as_bytes(), "=test", interner).unwrap()
}

/// Decoded contents of the first token, which must be a string.
fn long_string(source: &str) -> Vec<u8> {
    let interner = StringInterner::new();
    match tokens(&interner, source)[0].kind {
        TokenKind::String(name) => interner.lookup(name).to_vec(),
        other => panic!("expected a string, got {other:?}"),
    }
}

fn error(source: &str) -> LexError {
    let interner = StringInterner::new();
    crate::lex(source.as_bytes(), "=test", &interner).unwrap_err()
}

fn sep(source: &str) -> Sep {
    let interner = StringInterner::new();
    let buf = SourceBuffer::new(source);
    let mut lexer = LexState::new("=test", buf.cursor(), &interner);
    lexer.skip_sep()
}

#[test]
fn separator_levels() {
    assert_eq!(sep("[["), Sep::Level(0));
    assert_eq!(sep("[**["), Sep::Level(2));
    assert_eq!(sep("]*]"), Sep::Level(1));
    assert_eq!(sep("[x"), Sep::Absent);
    assert_eq!(sep("["), Sep::Absent);
    assert_eq!(sep("[*]"), Sep::Malformed(1));
    assert_eq!(sep("[***"), Sep::Malformed(3));
}

#[test]
fn plain_long_strings() {
    assert_eq!(long_string("[[abc]]"), b"abc");
    assert_eq!(long_string("[[]]"), b"");
    assert_eq!(long_string("[[ 'quoted' \"too\" \\n ]]"), b" 'quoted' \"too\" \\n ");
}

#[test]
fn leading_newline_is_dropped() {
    assert_eq!(long_string("[[\nabc]]"), b"abc");
    assert_eq!(long_string("[[\r\nabc]]"), b"abc");
    assert_eq!(long_string("[[\n\nabc]]"), b"\nabc");
}

#[test]
fn embedded_newlines_are_normalized() {
    assert_eq!(long_string("[[a\r\nb]]"), b"a\nb");
    assert_eq!(long_string("[[a\n\rb]]"), b"a\nb");
    assert_eq!(long_string("[[a\r\rb]]"), b"a\n\nb");
}

#[test]
fn newlines_inside_are_counted() {
    let interner = StringInterner::new();
    let tokens = tokens(&interner, "[[a\nb\r\nc]] x");
    assert_eq!(tokens[0].line, 3);
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn same_level_brackets_nest() {
    assert_eq!(long_string("[[a[[b]]c]]"), b"a[[b]]c");
    assert_eq!(
        long_string("[*[ a [*[ b ]*] c ]*]"),
        b" a [*[ b ]*] c "
    );
}

#[test]
fn other_levels_are_content() {
    assert_eq!(long_string("[[ [*[ ]]"), b" [*[ ");
    assert_eq!(
        long_string("[**[ x ]*] ]***] ]**]"),
        b" x ]*] ]***] "
    );
}

#[test]
fn missing_closer_is_unterminated() {
    let err = error("[**[ x ]*] ]***]");
    assert_eq!(err.kind, LexErrorKind::UnfinishedLongString);
    assert_eq!(err.category(), ErrorCategory::Unterminated);
    assert_eq!(err.to_string(), "test:1: unfinished long string near '<eof>'");

    let err = error("[[ [[ ]]");
    assert_eq!(err.kind, LexErrorKind::UnfinishedLongString);
}

#[test]
fn malformed_opener() {
    let err = error("x = [*x");
    assert_eq!(err.kind, LexErrorKind::InvalidLongDelimiter);
    assert_eq!(err.category(), ErrorCategory::MalformedDelimiter);
    assert_eq!(
        err.to_string(),
        "test:1: invalid long string delimiter near '[*'"
    );
}

#[test]
fn lone_bracket_is_a_character() {
    let interner = StringInterner::new();
    let kinds: Vec<_> = tokens(&interner, "[=").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Char(b'['), TokenKind::Char(b'='), TokenKind::Eos]
    );
}

#[test]
fn long_comments_are_skipped() {
    let interner = StringInterner::new();
    let x = interner.intern_str("x");

    let skipped = tokens(&interner, "--[[ a\nb ]] x");
    assert_eq!(skipped[0].kind, TokenKind::Name(x));
    assert_eq!(skipped[0].line, 2);

    let nested = tokens(&interner, "--[*[ ]] [*[ ]*] ]*] x");
    assert_eq!(nested[0].kind, TokenKind::Name(x));
}

#[test]
fn unfinished_long_comment() {
    let err = error("--[[ abc\n");
    assert_eq!(err.kind, LexErrorKind::UnfinishedLongComment);
    assert_eq!(
        err.to_string(),
        "test:2: unfinished long comment near '<eof>'"
    );
}

#[test]
fn long_strings_are_pinned() {
    let interner = StringInterner::new();
    let buf = SourceBuffer::new("[[body]]");
    let mut lexer = LexState::new("=test", buf.cursor(), &interner);
    lexer.advance().unwrap();
    assert!(lexer.pins().contains(interner.intern_str("body")));
}
