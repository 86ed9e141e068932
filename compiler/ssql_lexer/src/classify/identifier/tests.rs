use super::*;
use crate::classify::tests::{run, run_with};
use crate::{EscapePolicy, LexErrorKind, LexerConfig};
use pretty_assertions::assert_eq;

// === Unquoted ===

#[test]
fn unquoted_keeps_exact_lexeme() {
    let outcome = run(&Identifier, "player_Name2 FROM");
    assert_eq!(outcome.kind(), Some(TokenKind::Identifier));
    assert_eq!(outcome.text.as_deref(), Some("player_Name2"));
    assert_eq!(outcome.consumed, 12);
}

#[test]
fn leading_underscore() {
    let outcome = run(&Identifier, "_tmp");
    assert_eq!(outcome.text.as_deref(), Some("_tmp"));
}

#[test]
fn stops_at_non_identifier_byte() {
    let outcome = run(&Identifier, "player.id");
    assert_eq!(outcome.text.as_deref(), Some("player"));
    assert_eq!(outcome.consumed, 6);
}

#[test]
fn digits_cannot_start() {
    let outcome = run(&Identifier, "1abc");
    assert_eq!(outcome.scan, Ok(Scan::Declined));
}

#[test]
fn keyword_carries_no_text() {
    for source in ["select", "SELECT", "SeLeCt"] {
        let outcome = run(&Identifier, source);
        assert_eq!(outcome.kind(), Some(TokenKind::Select), "{source}");
        assert_eq!(outcome.text, None);
    }
}

#[test]
fn keyword_prefix_is_identifier() {
    let outcome = run(&Identifier, "selection");
    assert_eq!(outcome.kind(), Some(TokenKind::Identifier));
    assert_eq!(outcome.text.as_deref(), Some("selection"));
}

// === Quoted ===

#[test]
fn quoted_stores_inner_text() {
    let outcome = run(&Identifier, "\"Player ID\",");
    assert_eq!(outcome.kind(), Some(TokenKind::Identifier));
    assert_eq!(outcome.text.as_deref(), Some("Player ID"));
    assert_eq!(outcome.consumed, 11);
}

#[test]
fn quoted_keyword_is_identifier() {
    let outcome = run(&Identifier, "\"select\"");
    assert_eq!(outcome.kind(), Some(TokenKind::Identifier));
    assert_eq!(outcome.text.as_deref(), Some("select"));
}

#[test]
fn quoted_escape_collapses_by_default() {
    let outcome = run(&Identifier, "\"a\"\"b\"");
    assert_eq!(outcome.text.as_deref(), Some("a\"b"));
    assert_eq!(outcome.consumed, 6);
}

#[test]
fn quoted_escape_preserved_when_configured() {
    let config =
        LexerConfig::default().with_quoted_identifier_escapes(EscapePolicy::Preserve);
    let outcome = run_with(&Identifier, "\"a\"\"b\"", config);
    assert_eq!(outcome.text.as_deref(), Some("a\"\"b"));
}

#[test]
fn unterminated_quoted_is_invalid_string() {
    let outcome = run(&Identifier, "\"abc");
    assert_eq!(outcome.error(), Some(LexErrorKind::InvalidString));
    let Err(err) = outcome.scan else {
        panic!("expected a fault");
    };
    assert_eq!(err.start.offset, 0);
    assert_eq!(err.pos.offset, 4);
}

#[test]
fn empty_quoted_is_empty_identifier() {
    let outcome = run(&Identifier, "\"\" x");
    assert_eq!(outcome.kind(), Some(TokenKind::Identifier));
    assert_eq!(outcome.text.as_deref(), Some(""));
    assert_eq!(outcome.consumed, 2);
}

#[test]
fn quoted_escape_only() {
    // `""""` is a single escaped quote.
    let outcome = run(&Identifier, "\"\"\"\"");
    assert_eq!(outcome.text.as_deref(), Some("\""));
}
