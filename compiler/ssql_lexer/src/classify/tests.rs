use super::*;
use pretty_assertions::assert_eq;

/// What a single classifier attempt did to a fresh context.
pub(super) struct Outcome {
    pub(super) scan: Result<Scan, LexError>,
    /// Cursor offset after the attempt.
    pub(super) consumed: usize,
    /// Resolved arena text of an emitted token.
    pub(super) text: Option<String>,
}

impl Outcome {
    pub(super) fn kind(&self) -> Option<TokenKind> {
        match self.scan {
            Ok(Scan::Emitted(token)) => Some(token.kind),
            _ => None,
        }
    }

    pub(super) fn error(&self) -> Option<crate::LexErrorKind> {
        self.scan.as_ref().err().map(|err| err.kind)
    }
}

pub(super) fn run(classifier: &dyn Classifier, source: &str) -> Outcome {
    run_with(classifier, source, LexerConfig::default())
}

pub(super) fn run_with(classifier: &dyn Classifier, source: &str, config: LexerConfig) -> Outcome {
    let mut cx = ScanContext::new(source, config);
    let scan = classifier.classify(&mut cx);
    let text = match scan {
        Ok(Scan::Emitted(Token {
            text: Some(text), ..
        })) => cx.arena.text(text).map(str::to_owned),
        _ => None,
    };
    Outcome {
        scan,
        consumed: cx.cursor.offset(),
        text,
    }
}

// === Delimited scanning ===

#[test]
fn delimited_simple() {
    let mut cursor = Cursor::new("'abc' rest");
    let inner = scan_delimited(&mut cursor, b'\'');
    assert_eq!(inner, Some(Delimited { start: 1, end: 4 }));
    assert_eq!(cursor.offset(), 5);
}

#[test]
fn delimited_doubled_quote_does_not_close() {
    let mut cursor = Cursor::new("'it''s' x");
    let inner = scan_delimited(&mut cursor, b'\'');
    assert_eq!(inner, Some(Delimited { start: 1, end: 6 }));
    assert_eq!(cursor.offset(), 7);
}

#[test]
fn delimited_empty() {
    let mut cursor = Cursor::new("\"\"");
    assert_eq!(
        scan_delimited(&mut cursor, b'"'),
        Some(Delimited { start: 1, end: 1 })
    );
    assert!(cursor.at_end());
}

#[test]
fn delimited_unterminated_runs_to_end() {
    let mut cursor = Cursor::new("'abc\ndef");
    assert_eq!(scan_delimited(&mut cursor, b'\''), None);
    assert!(cursor.at_end());
    assert_eq!(cursor.line(), 1);
}

#[test]
fn delimited_trailing_escape_is_unterminated() {
    // `''` at the very end escapes the quote instead of closing.
    let mut cursor = Cursor::new("'abc''");
    assert_eq!(scan_delimited(&mut cursor, b'\''), None);
}

#[test]
fn delimited_spans_lines() {
    let mut cursor = Cursor::new("'a\nb' c");
    assert_eq!(
        scan_delimited(&mut cursor, b'\''),
        Some(Delimited { start: 1, end: 4 })
    );
    assert_eq!(cursor.line(), 1);
    assert_eq!(cursor.column(), 2);
}

// === Dispatch table ===

#[test]
fn classifier_order() {
    let names: Vec<_> = CLASSIFIERS.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["identifier", "literal", "comment", "symbol"]);
}

#[test]
fn end_of_input_declines() {
    for classifier in CLASSIFIERS {
        let outcome = run(*classifier, "");
        assert_eq!(outcome.scan, Ok(Scan::Declined), "{}", classifier.name());
    }
}

#[test]
fn declining_leaves_cursor_in_place() {
    for source in ["@", "#x", "\u{e9}t\u{e9}", "\0"] {
        for classifier in CLASSIFIERS {
            let outcome = run(*classifier, source);
            assert_eq!(outcome.scan, Ok(Scan::Declined), "{} on {source:?}", classifier.name());
            assert_eq!(outcome.consumed, 0);
        }
    }
}
