//! Unquoted and quoted identifiers, plus keyword resolution.

use super::{scan_delimited, Classifier, Scan, ScanContext};
use crate::{keywords, LexError, Token, TokenKind};

pub(crate) struct Identifier;

/// `[A-Za-z_]`
#[inline]
fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// `[A-Za-z0-9_]`
#[inline]
fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

impl Classifier for Identifier {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn classify(&self, cx: &mut ScanContext<'_>) -> Result<Scan, LexError> {
        match cx.cursor.current() {
            b'"' => quoted(cx),
            byte if is_ident_start(byte) => Ok(unquoted(cx)),
            _ => Ok(Scan::Declined),
        }
    }
}

/// Keywords resolve before anything is copied into the arena.
fn unquoted(cx: &mut ScanContext<'_>) -> Scan {
    let start = cx.cursor.position();
    cx.cursor.skip_while(is_ident_continue);
    let lexeme = cx.cursor.slice_from(start.offset);

    match keywords::lookup(lexeme) {
        Some(kind) => Scan::Emitted(Token::new(kind, start)),
        None => cx.emit_text(TokenKind::Identifier, start, lexeme),
    }
}

/// `"..."` with `""` as an escaped quote. Never a keyword; may be empty.
fn quoted(cx: &mut ScanContext<'_>) -> Result<Scan, LexError> {
    let start = cx.cursor.position();
    let Some(inner) = scan_delimited(&mut cx.cursor, b'"') else {
        return Err(LexError::invalid_string(start, cx.cursor.position()));
    };

    let raw = cx.cursor.slice(inner.start, inner.end);
    let text = cx.config.quoted_identifier_escapes.apply(raw, '"');
    Ok(cx.emit_text(TokenKind::Identifier, start, &text))
}

#[cfg(test)]
mod tests;
