//! Operators and punctuation, longest match first.

use super::{Classifier, Scan, ScanContext};
use crate::{LexError, Token, TokenKind};

pub(crate) struct Symbol;

impl Classifier for Symbol {
    fn name(&self) -> &'static str {
        "symbol"
    }

    fn classify(&self, cx: &mut ScanContext<'_>) -> Result<Scan, LexError> {
        let start = cx.cursor.position();
        let next = cx.cursor.peek();

        let (kind, len) = match cx.cursor.current() {
            b'*' => (TokenKind::Asterisk, 1),
            b',' => (TokenKind::Comma, 1),
            b'.' => (TokenKind::Dot, 1),
            b'-' => (TokenKind::Minus, 1),
            b'+' => (TokenKind::Plus, 1),
            b';' => (TokenKind::Semicolon, 1),
            b'/' => (TokenKind::Slash, 1),
            b'(' => (TokenKind::ParenthesisOpen, 1),
            b')' => (TokenKind::ParenthesisClose, 1),
            b'=' if next == b'=' => (TokenKind::Equals, 2),
            b'=' => (TokenKind::Equals, 1),
            b'>' if next == b'=' => (TokenKind::GreaterEquals, 2),
            b'>' => (TokenKind::Greater, 1),
            b'<' if next == b'=' => (TokenKind::LesserEquals, 2),
            b'<' if next == b'>' => (TokenKind::NotEquals, 2),
            b'<' => (TokenKind::Lesser, 1),
            b'!' if next == b'=' => (TokenKind::NotEquals, 2),
            b'|' if next == b'|' => (TokenKind::DoublePipe, 2),
            b'!' | b'|' => return Err(LexError::unexpected_character(start)),
            _ => return Ok(Scan::Declined),
        };

        cx.cursor.advance_to(start.offset + len);
        Ok(Scan::Emitted(Token::new(kind, start)))
    }
}

#[cfg(test)]
mod tests;
