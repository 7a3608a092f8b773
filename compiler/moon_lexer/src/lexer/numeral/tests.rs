use super::*;
use crate::lex_error::ErrorCategory;
use moon_ir::StringInterner;
use pretty_assertions::assert_eq;

fn numbers(source: &str) -> Vec<f64> {
    let interner = StringInterner::new();
    crate::lex(source.as_bytes(), "=test", &interner)
        .unwrap()
        .into_iter()
        .filter_map(|t| t.kind.as_number())
        .collect()
}

fn error(source: &str) -> LexError {
    let interner = StringInterner::new();
    crate::lex(source.as_bytes(), "=test", &interner).unwrap_err()
}

#[test]
fn conversion() {
    assert_eq!(parse_number(b"3"), Some(3.0));
    assert_eq!(parse_number(b"3."), Some(3.0));
    assert_eq!(parse_number(b".5"), Some(0.5));
    assert_eq!(parse_number(b"1E+2"), Some(100.0));
    assert_eq!(parse_number(b"2.5e-1"), Some(0.25));
    assert_eq!(parse_number(b"1e"), None);
    assert_eq!(parse_number(b"1e+"), None);
    assert_eq!(parse_number(b"1.2.3"), None);
    assert_eq!(parse_number(&[b'1', 0xFF]), None);
}

#[test]
fn numeral_forms() {
    assert_eq!(
        numbers("3 3.0 3.1416 314.16e-2 0.31416E1 .5 7."),
        vec![3.0, 3.0, 3.1416, 3.1416, 3.1416, 0.5, 7.0]
    );
}

#[test]
fn overflow_is_infinite() {
    assert_eq!(numbers("1e999"), vec![f64::INFINITY]);
}

#[test]
fn numeral_stops_at_other_characters() {
    let interner = StringInterner::new();
    let kinds: Vec<_> = crate::lex(b"1 .. 2 0x", "=test", &interner)
        .unwrap()
        .iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::number(1.0),
            TokenKind::Concat,
            TokenKind::number(2.0),
            TokenKind::number(0.0),
            TokenKind::Name(interner.intern_str("x")),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn decimal_point_followed_by_concat() {
    let err = error("x = 3..4");
    assert_eq!(err.kind, LexErrorKind::AmbiguousDecimalPoint);
    assert_eq!(err.category(), ErrorCategory::MalformedLiteral);
    assert_eq!(
        err.to_string(),
        "test:1: ambiguous syntax (decimal point x string concatenation) near '3..'"
    );
    assert_eq!(error(".5..").kind, LexErrorKind::AmbiguousDecimalPoint);
}

#[test]
fn malformed_exponent() {
    let err = error("1e");
    assert_eq!(err.kind, LexErrorKind::MalformedNumber);
    assert_eq!(err.to_string(), "test:1: malformed number near '1e'");
    assert_eq!(error("2E-").near, "2E-");
}
