//! Token model.
//!
//! A [`Token`] is a small `Copy` record: kind, source position and an
//! optional handle to arena-owned text. Only identifiers and literals carry
//! text; for operators, punctuation and keywords the kind is the payload.

use std::fmt;

use ssql_lexer_core::{SourcePos, TextRef};

/// Closed set of token kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // === Identifiers & Literals ===
    /// `table_name` or `"Table Name"`.
    Identifier,
    /// `3.14`, `1000`, `.5`.
    LiteralNumber,
    /// `'abc'`.
    LiteralText,

    // === Operators & Punctuation ===
    /// `*`
    Asterisk,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `=` or `==`
    Equals,
    /// `>`
    Greater,
    /// `>=`
    GreaterEquals,
    /// `<`
    Lesser,
    /// `<=`
    LesserEquals,
    /// `-`
    Minus,
    /// `<>` or `!=`
    NotEquals,
    /// `)`
    ParenthesisClose,
    /// `(`
    ParenthesisOpen,
    /// `||`
    DoublePipe,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,

    // === Keywords: query structure ===
    Select,
    From,
    Where,
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    On,
    Using,
    As,
    Group,
    Order,
    By,
    Having,
    Limit,
    Offset,
    Distinct,
    All,
    Union,
    Intersect,
    Except,
    Asc,
    Desc,
    Case,
    When,
    Then,
    Else,
    End,

    // === Keywords: comparison & logic ===
    And,
    Or,
    Not,
    In,
    Is,
    Null,
    Like,
    Between,
    Exists,
    True,
    False,

    // === Keywords: DML & DDL ===
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,
    Create,
    Table,
    Drop,
    Alter,
    Index,
    View,
    Primary,
    Key,
    Default,
}

impl TokenKind {
    /// Human-readable name used when rendering tokens.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::LiteralNumber => "Literal_Number",
            TokenKind::LiteralText => "Literal_Text",

            TokenKind::Asterisk => "Asterisk",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::Equals => "Equals",
            TokenKind::Greater => "Greater",
            TokenKind::GreaterEquals => "Greater_Equals",
            TokenKind::Lesser => "Lesser",
            TokenKind::LesserEquals => "Lesser_Equals",
            TokenKind::Minus => "Minus",
            TokenKind::NotEquals => "Not_Equals",
            TokenKind::ParenthesisClose => "Parenthesis_Close",
            TokenKind::ParenthesisOpen => "Parenthesis_Open",
            TokenKind::DoublePipe => "Double_Pipe",
            TokenKind::Plus => "Plus",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Slash => "Slash",

            TokenKind::Select => "Select",
            TokenKind::From => "From",
            TokenKind::Where => "Where",
            TokenKind::Join => "Join",
            TokenKind::Inner => "Inner",
            TokenKind::Left => "Left",
            TokenKind::Right => "Right",
            TokenKind::Full => "Full",
            TokenKind::Outer => "Outer",
            TokenKind::Cross => "Cross",
            TokenKind::On => "On",
            TokenKind::Using => "Using",
            TokenKind::As => "As",
            TokenKind::Group => "Group",
            TokenKind::Order => "Order",
            TokenKind::By => "By",
            TokenKind::Having => "Having",
            TokenKind::Limit => "Limit",
            TokenKind::Offset => "Offset",
            TokenKind::Distinct => "Distinct",
            TokenKind::All => "All",
            TokenKind::Union => "Union",
            TokenKind::Intersect => "Intersect",
            TokenKind::Except => "Except",
            TokenKind::Asc => "Asc",
            TokenKind::Desc => "Desc",
            TokenKind::Case => "Case",
            TokenKind::When => "When",
            TokenKind::Then => "Then",
            TokenKind::Else => "Else",
            TokenKind::End => "End",

            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Not => "Not",
            TokenKind::In => "In",
            TokenKind::Is => "Is",
            TokenKind::Null => "Null",
            TokenKind::Like => "Like",
            TokenKind::Between => "Between",
            TokenKind::Exists => "Exists",
            TokenKind::True => "True",
            TokenKind::False => "False",

            TokenKind::Insert => "Insert",
            TokenKind::Into => "Into",
            TokenKind::Values => "Values",
            TokenKind::Update => "Update",
            TokenKind::Set => "Set",
            TokenKind::Delete => "Delete",
            TokenKind::Create => "Create",
            TokenKind::Table => "Table",
            TokenKind::Drop => "Drop",
            TokenKind::Alter => "Alter",
            TokenKind::Index => "Index",
            TokenKind::View => "View",
            TokenKind::Primary => "Primary",
            TokenKind::Key => "Key",
            TokenKind::Default => "Default",
        }
    }

    /// Whether tokens of this kind carry arena text.
    #[inline]
    pub const fn has_text(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::LiteralNumber | TokenKind::LiteralText
        )
    }

    /// Whether this kind is a reserved word.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        !self.has_text() && !self.is_symbol()
    }

    /// Whether this kind is an operator or punctuation symbol.
    #[inline]
    pub const fn is_symbol(self) -> bool {
        matches!(
            self,
            TokenKind::Asterisk
                | TokenKind::Comma
                | TokenKind::Dot
                | TokenKind::Equals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
                | TokenKind::Lesser
                | TokenKind::LesserEquals
                | TokenKind::Minus
                | TokenKind::NotEquals
                | TokenKind::ParenthesisClose
                | TokenKind::ParenthesisOpen
                | TokenKind::DoublePipe
                | TokenKind::Plus
                | TokenKind::Semicolon
                | TokenKind::Slash
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit.
///
/// `text` is `Some` exactly when `kind.has_text()`; resolve it through the
/// owning [`Session`](crate::Session).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Where the token starts.
    pub pos: SourcePos,
    /// Arena-owned text for identifiers and literals.
    pub text: Option<TextRef>,
}

impl Token {
    /// Create a payload-less token (operator, punctuation, keyword).
    #[inline]
    pub fn new(kind: TokenKind, pos: SourcePos) -> Self {
        debug_assert!(!kind.has_text(), "{kind} tokens must carry text");
        Token {
            kind,
            pos,
            text: None,
        }
    }

    /// Create an identifier or literal token.
    #[inline]
    pub fn with_text(kind: TokenKind, pos: SourcePos, text: TextRef) -> Self {
        debug_assert!(kind.has_text(), "{kind} tokens carry no text");
        Token {
            kind,
            pos,
            text: Some(text),
        }
    }

    /// Byte offset of the token's first byte.
    #[inline]
    pub fn byte_position(&self) -> usize {
        self.pos.offset
    }

    /// 0-based line of the token's first byte.
    #[inline]
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    /// Column of the token's first byte.
    #[inline]
    pub fn column(&self) -> u32 {
        self.pos.column
    }
}
