//! Reserved keyword resolution.
//!
//! Keywords are matched case-insensitively (ASCII only): `select`, `SELECT`
//! and `SeLeCt` all resolve to [`TokenKind::Select`]. The lexeme is
//! upper-cased into a stack buffer and looked up in a single hash table, so
//! resolving an identifier never allocates.
//!
//! Quoted identifiers never reach this table: `"select"` stays an
//! identifier.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::TokenKind;

/// Length of the longest reserved word (`INTERSECT`).
const MAX_KEYWORD_LEN: usize = 9;

/// Length of the shortest reserved word (`ON`, `AS`, `BY`, ...).
const MIN_KEYWORD_LEN: usize = 2;

/// Every reserved word with its upper-case spelling.
const RESERVED: &[(&str, TokenKind)] = &[
    ("SELECT", TokenKind::Select),
    ("FROM", TokenKind::From),
    ("WHERE", TokenKind::Where),
    ("JOIN", TokenKind::Join),
    ("INNER", TokenKind::Inner),
    ("LEFT", TokenKind::Left),
    ("RIGHT", TokenKind::Right),
    ("FULL", TokenKind::Full),
    ("OUTER", TokenKind::Outer),
    ("CROSS", TokenKind::Cross),
    ("ON", TokenKind::On),
    ("USING", TokenKind::Using),
    ("AS", TokenKind::As),
    ("GROUP", TokenKind::Group),
    ("ORDER", TokenKind::Order),
    ("BY", TokenKind::By),
    ("HAVING", TokenKind::Having),
    ("LIMIT", TokenKind::Limit),
    ("OFFSET", TokenKind::Offset),
    ("DISTINCT", TokenKind::Distinct),
    ("ALL", TokenKind::All),
    ("UNION", TokenKind::Union),
    ("INTERSECT", TokenKind::Intersect),
    ("EXCEPT", TokenKind::Except),
    ("ASC", TokenKind::Asc),
    ("DESC", TokenKind::Desc),
    ("CASE", TokenKind::Case),
    ("WHEN", TokenKind::When),
    ("THEN", TokenKind::Then),
    ("ELSE", TokenKind::Else),
    ("END", TokenKind::End),
    ("AND", TokenKind::And),
    ("OR", TokenKind::Or),
    ("NOT", TokenKind::Not),
    ("IN", TokenKind::In),
    ("IS", TokenKind::Is),
    ("NULL", TokenKind::Null),
    ("LIKE", TokenKind::Like),
    ("BETWEEN", TokenKind::Between),
    ("EXISTS", TokenKind::Exists),
    ("TRUE", TokenKind::True),
    ("FALSE", TokenKind::False),
    ("INSERT", TokenKind::Insert),
    ("INTO", TokenKind::Into),
    ("VALUES", TokenKind::Values),
    ("UPDATE", TokenKind::Update),
    ("SET", TokenKind::Set),
    ("DELETE", TokenKind::Delete),
    ("CREATE", TokenKind::Create),
    ("TABLE", TokenKind::Table),
    ("DROP", TokenKind::Drop),
    ("ALTER", TokenKind::Alter),
    ("INDEX", TokenKind::Index),
    ("VIEW", TokenKind::View),
    ("PRIMARY", TokenKind::Primary),
    ("KEY", TokenKind::Key),
    ("DEFAULT", TokenKind::Default),
];

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| RESERVED.iter().copied().collect());

/// Look up a reserved keyword, ignoring ASCII case.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    if !(MIN_KEYWORD_LEN..=MAX_KEYWORD_LEN).contains(&bytes.len()) {
        return None;
    }

    let mut buf = [0u8; MAX_KEYWORD_LEN];
    let upper = &mut buf[..bytes.len()];
    upper.copy_from_slice(bytes);
    upper.make_ascii_uppercase();

    let upper = std::str::from_utf8(upper).ok()?;
    KEYWORDS.get(upper).copied()
}

/// Whether `text` is a reserved word in any letter casing.
pub fn is_keyword(text: &str) -> bool {
    lookup(text).is_some()
}
