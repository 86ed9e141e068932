//! Numeric and text literals.
//!
//! A number is recognized when the cursor sits on a digit, or on `.`
//! immediately followed by a digit. Its extent follows the decimal
//! floating-point grammar accepted by `f64::from_str`:
//!
//! ```text
//! number   = digits? ("." digits?)? exponent?
//! exponent = ("e" | "E") ("+" | "-")? digits
//! ```
//!
//! The exponent is only consumed when at least one digit follows it, so
//! `1e` lexes as `1` then the identifier `e`. Trailing letters are never
//! part of the number.

use super::{scan_delimited, Classifier, Scan, ScanContext};
use crate::{LexError, TokenKind};

pub(crate) struct Literal;

impl Classifier for Literal {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn classify(&self, cx: &mut ScanContext<'_>) -> Result<Scan, LexError> {
        match cx.cursor.current() {
            b'0'..=b'9' => number(cx),
            b'.' if cx.cursor.peek().is_ascii_digit() => number(cx),
            b'\'' => text(cx),
            _ => Ok(Scan::Declined),
        }
    }
}

/// Length of the longest decimal float literal at the start of `bytes`.
fn float_literal_len(bytes: &[u8]) -> usize {
    let digits_from = |from: usize| {
        from + bytes
            .get(from..)
            .unwrap_or_default()
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_end = digits_from(0);
    let mut len = int_end;
    if bytes.get(len) == Some(&b'.') {
        len = digits_from(len + 1);
    }
    // A lone `.` is not a number.
    if len == 1 && int_end == 0 {
        return 0;
    }
    if len > 0 && matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exp = len + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            len = exp_end;
        }
    }
    len
}

/// Scan a numeric literal at the cursor.
fn number(cx: &mut ScanContext<'_>) -> Result<Scan, LexError> {
    let start = cx.cursor.position();
    let len = float_literal_len(cx.cursor.rest());
    if len == 0 {
        return Err(LexError::invalid_number(start, cx.cursor.position()));
    }

    cx.cursor.advance_to(start.offset + len);
    let lexeme = cx.cursor.slice_from(start.offset);
    if lexeme.parse::<f64>().is_err() {
        return Err(LexError::invalid_number(start, cx.cursor.position()));
    }
    Ok(cx.emit_text(TokenKind::LiteralNumber, start, lexeme))
}

/// `'...'` with `''` as an escaped quote.
fn text(cx: &mut ScanContext<'_>) -> Result<Scan, LexError> {
    let start = cx.cursor.position();
    let Some(inner) = scan_delimited(&mut cx.cursor, b'\'') else {
        return Err(LexError::unclosed_string(start, cx.cursor.position()));
    };

    let raw = cx.cursor.slice(inner.start, inner.end);
    let text = cx.config.text_literal_escapes.apply(raw, '\'');
    Ok(cx.emit_text(TokenKind::LiteralText, start, &text))
}

#[cfg(test)]
mod tests;
