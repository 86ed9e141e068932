use super::*;
use crate::classify::tests::run;
use crate::LexErrorKind;
use pretty_assertions::assert_eq;

fn symbol(source: &str) -> (Option<TokenKind>, usize) {
    let outcome = run(&Symbol, source);
    (outcome.kind(), outcome.consumed)
}

#[test]
fn single_byte_symbols() {
    let cases = [
        ("*", TokenKind::Asterisk),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        ("-", TokenKind::Minus),
        ("+", TokenKind::Plus),
        (";", TokenKind::Semicolon),
        ("/", TokenKind::Slash),
        ("(", TokenKind::ParenthesisOpen),
        (")", TokenKind::ParenthesisClose),
        ("=", TokenKind::Equals),
        (">", TokenKind::Greater),
        ("<", TokenKind::Lesser),
    ];
    for (source, kind) in cases {
        assert_eq!(symbol(source), (Some(kind), 1), "{source:?}");
    }
}

#[test]
fn two_byte_symbols() {
    let cases = [
        ("==", TokenKind::Equals),
        (">=", TokenKind::GreaterEquals),
        ("<=", TokenKind::LesserEquals),
        ("<>", TokenKind::NotEquals),
        ("!=", TokenKind::NotEquals),
        ("||", TokenKind::DoublePipe),
    ];
    for (source, kind) in cases {
        assert_eq!(symbol(source), (Some(kind), 2), "{source:?}");
    }
}

#[test]
fn maximal_munch_stops_after_two_bytes() {
    assert_eq!(symbol("<>="), (Some(TokenKind::NotEquals), 2));
    assert_eq!(symbol("==="), (Some(TokenKind::Equals), 2));
    assert_eq!(symbol("|||"), (Some(TokenKind::DoublePipe), 2));
}

#[test]
fn lesser_before_other_bytes() {
    assert_eq!(symbol("< 3"), (Some(TokenKind::Lesser), 1));
    assert_eq!(symbol("<<"), (Some(TokenKind::Lesser), 1));
}

#[test]
fn bare_bang_is_unexpected() {
    for source in ["!", "! =", "!x"] {
        let outcome = run(&Symbol, source);
        assert_eq!(outcome.error(), Some(LexErrorKind::UnexpectedCharacter), "{source:?}");
        assert_eq!(outcome.consumed, 0);
    }
}

#[test]
fn bare_pipe_is_unexpected() {
    for source in ["|", "| |", "|a"] {
        let outcome = run(&Symbol, source);
        assert_eq!(outcome.error(), Some(LexErrorKind::UnexpectedCharacter), "{source:?}");
    }
}

#[test]
fn unknown_byte_declines() {
    assert_eq!(run(&Symbol, "@").scan, Ok(Scan::Declined));
}
