//! Token classifiers.
//!
//! Each classifier looks at the cursor positioned on a candidate token start
//! and either declines without consuming anything, consumes input, or
//! faults. The driver tries them in the fixed order of [`CLASSIFIERS`];
//! order matters because `.5` must be seen by the literal classifier before
//! the symbol classifier turns the `.` into a `Dot`.

mod comment;
mod identifier;
mod literal;
mod symbol;

use ssql_lexer_core::{Cursor, SourcePos, TextArena};

use crate::{LexError, LexerConfig, Token, TokenKind};

/// Outcome of a single classifier attempt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Scan {
    /// Not applicable here; nothing consumed.
    Declined,
    /// Input consumed without producing a token (comments).
    Skipped,
    /// Input consumed and a token produced.
    Emitted(Token),
}

/// Mutable scanning state shared by every classifier.
pub(crate) struct ScanContext<'src> {
    pub(crate) cursor: Cursor<'src>,
    pub(crate) arena: TextArena,
    pub(crate) config: LexerConfig,
}

impl<'src> ScanContext<'src> {
    pub(crate) fn new(source: &'src str, config: LexerConfig) -> Self {
        ScanContext {
            cursor: Cursor::new(source),
            arena: TextArena::with_block_size(config.arena_block_size),
            config,
        }
    }

    /// Copy `text` into the arena and wrap it in a token.
    fn emit_text(&mut self, kind: TokenKind, pos: SourcePos, text: &str) -> Scan {
        let text = self.arena.duplicate_text(text);
        Scan::Emitted(Token::with_text(kind, pos, text))
    }
}

/// A recognizer for one category of lexeme.
pub(crate) trait Classifier {
    /// Name used in trace output.
    fn name(&self) -> &'static str;

    /// Attempt to recognize a lexeme at the cursor.
    ///
    /// Must leave the cursor untouched when returning [`Scan::Declined`].
    fn classify(&self, cx: &mut ScanContext<'_>) -> Result<Scan, LexError>;
}

/// Classifiers in dispatch priority order.
pub(crate) const CLASSIFIERS: &[&dyn Classifier] = &[
    &identifier::Identifier,
    &literal::Literal,
    &comment::Comment,
    &symbol::Symbol,
];

/// Inner byte range of a delimited construct.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Delimited {
    start: usize,
    end: usize,
}

/// Scan a construct opened by `quote` at the cursor, where a doubled `quote`
/// is an escape and does not close it.
///
/// On success the cursor sits past the closing delimiter. Returns `None`
/// with the cursor at end of input when the construct is never closed.
fn scan_delimited(cursor: &mut Cursor<'_>, quote: u8) -> Option<Delimited> {
    debug_assert_eq!(cursor.current(), quote);
    cursor.advance();
    let start = cursor.offset();

    loop {
        let Some(close) = cursor.find(quote) else {
            cursor.advance_to(cursor.source_len());
            return None;
        };
        cursor.advance_to(close + 1);
        if !cursor.at_end() && cursor.current() == quote {
            cursor.advance();
            continue;
        }
        return Some(Delimited { start, end: close });
    }
}

#[cfg(test)]
mod tests;
