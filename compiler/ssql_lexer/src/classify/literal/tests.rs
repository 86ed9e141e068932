use super::*;
use crate::classify::tests::{run, run_with};
use crate::{EscapePolicy, LexErrorKind, LexerConfig};
use pretty_assertions::assert_eq;

// === Number extent ===

#[test]
fn extent_grammar() {
    let cases: &[(&str, usize)] = &[
        ("1000", 4),
        ("420.69", 6),
        (".55435", 6),
        ("5.", 2),
        ("1e10", 4),
        ("1E+3", 4),
        ("2.5e-3x", 6),
        ("1e", 1),
        ("1e+", 1),
        ("1.2.3", 3),
        ("0x1A", 1),
        (".", 0),
        (".e5", 0),
        ("abc", 0),
        ("", 0),
    ];
    for &(source, len) in cases {
        assert_eq!(float_literal_len(source.as_bytes()), len, "{source:?}");
    }
}

// === Numbers ===

#[test]
fn integer() {
    let outcome = run(&Literal, "1000");
    assert_eq!(outcome.kind(), Some(TokenKind::LiteralNumber));
    assert_eq!(outcome.text.as_deref(), Some("1000"));
}

#[test]
fn decimal() {
    let outcome = run(&Literal, "420.69;");
    assert_eq!(outcome.text.as_deref(), Some("420.69"));
    assert_eq!(outcome.consumed, 6);
}

#[test]
fn leading_dot() {
    let outcome = run(&Literal, ".55435");
    assert_eq!(outcome.kind(), Some(TokenKind::LiteralNumber));
    assert_eq!(outcome.text.as_deref(), Some(".55435"));
}

#[test]
fn trailing_letters_not_consumed() {
    let outcome = run(&Literal, ".545aasd");
    assert_eq!(outcome.text.as_deref(), Some(".545"));
    assert_eq!(outcome.consumed, 4);
}

#[test]
fn exponent() {
    let outcome = run(&Literal, "6.02e23 ");
    assert_eq!(outcome.text.as_deref(), Some("6.02e23"));
}

#[test]
fn bare_dot_declines() {
    let outcome = run(&Literal, ".x");
    assert_eq!(outcome.scan, Ok(Scan::Declined));
    assert_eq!(outcome.consumed, 0);
}

#[test]
fn no_number_at_cursor_is_invalid_number() {
    let mut cx = ScanContext::new(".", LexerConfig::default());
    let err = number(&mut cx).err().map(|err| err.kind);
    assert_eq!(err, Some(LexErrorKind::InvalidNumber));
}

// === Text ===

#[test]
fn text_excludes_delimiters() {
    let outcome = run(&Literal, "'won' THEN");
    assert_eq!(outcome.kind(), Some(TokenKind::LiteralText));
    assert_eq!(outcome.text.as_deref(), Some("won"));
    assert_eq!(outcome.consumed, 5);
}

#[test]
fn empty_text_is_allowed() {
    let outcome = run(&Literal, "''");
    assert_eq!(outcome.kind(), Some(TokenKind::LiteralText));
    assert_eq!(outcome.text.as_deref(), Some(""));
}

#[test]
fn text_escape_preserved_by_default() {
    let outcome = run(&Literal, "'it''s'");
    assert_eq!(outcome.text.as_deref(), Some("it''s"));
    assert_eq!(outcome.consumed, 7);
}

#[test]
fn text_escape_collapsed_when_configured() {
    let config = LexerConfig::default().with_text_literal_escapes(EscapePolicy::Collapse);
    let outcome = run_with(&Literal, "'it''s'", config);
    assert_eq!(outcome.text.as_deref(), Some("it's"));
}

#[test]
fn unterminated_text_is_unclosed_string() {
    let outcome = run(&Literal, "'abc");
    assert_eq!(outcome.error(), Some(LexErrorKind::UnclosedString));
    assert_eq!(outcome.consumed, 4);
}

#[test]
fn text_keeps_non_ascii() {
    let outcome = run(&Literal, "'caf\u{e9}'");
    assert_eq!(outcome.text.as_deref(), Some("caf\u{e9}"));
}
