//! Lexical fault types.
//!
//! Tokenization stops at the first fault. A [`LexError`] records what went
//! wrong, where the cursor was when the fault was detected, and where the
//! offending construct started (these differ for unterminated strings and
//! comments, which fail at end of input).

use std::fmt;

use ssql_lexer_core::SourcePos;

/// A lexical fault with its location.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {pos}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Cursor position when the fault was detected.
    pub pos: SourcePos,
    /// Start of the construct being scanned.
    pub start: SourcePos,
}

/// What kind of lexical fault occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// No classifier accepts the byte under the cursor, or an operator
    /// prefix (`!`, `|`) is missing its second byte.
    UnexpectedCharacter,
    /// `/*` without a closing `*/`.
    UnclosedCommentBlock,
    /// Quoted identifier without a closing `"`.
    InvalidString,
    /// Numeric literal rejected by the floating-point grammar.
    InvalidNumber,
    /// `'` text literal without a closing `'`.
    UnclosedString,
}

impl LexErrorKind {
    /// Stable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedCharacter => "Unexpected_Character",
            LexErrorKind::UnclosedCommentBlock => "Unclosed_Comment_Block",
            LexErrorKind::InvalidString => "Invalid_String",
            LexErrorKind::InvalidNumber => "Invalid_Number",
            LexErrorKind::UnclosedString => "Unclosed_String",
        }
    }

    /// Short hint describing how to fix the fault.
    pub const fn hint(self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedCharacter => "remove or quote the character",
            LexErrorKind::UnclosedCommentBlock => "add closing `*/`",
            LexErrorKind::InvalidString => "add closing `\"`",
            LexErrorKind::InvalidNumber => "numbers look like `1`, `2.5`, `.5` or `1e3`",
            LexErrorKind::UnclosedString => "add closing `'`",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl LexError {
    /// Create an unexpected character error at `pos`.
    #[cold]
    pub fn unexpected_character(pos: SourcePos) -> Self {
        Self {
            kind: LexErrorKind::UnexpectedCharacter,
            pos,
            start: pos,
        }
    }

    /// Create an unclosed block comment error.
    #[cold]
    pub fn unclosed_comment_block(start: SourcePos, pos: SourcePos) -> Self {
        Self {
            kind: LexErrorKind::UnclosedCommentBlock,
            pos,
            start,
        }
    }

    /// Create an invalid quoted identifier error.
    #[cold]
    pub fn invalid_string(start: SourcePos, pos: SourcePos) -> Self {
        Self {
            kind: LexErrorKind::InvalidString,
            pos,
            start,
        }
    }

    /// Create an invalid number error.
    #[cold]
    pub fn invalid_number(start: SourcePos, pos: SourcePos) -> Self {
        Self {
            kind: LexErrorKind::InvalidNumber,
            pos,
            start,
        }
    }

    /// Create an unclosed text literal error.
    #[cold]
    pub fn unclosed_string(start: SourcePos, pos: SourcePos) -> Self {
        Self {
            kind: LexErrorKind::UnclosedString,
            pos,
            start,
        }
    }
}
