//! Tokenizer configuration.

use std::borrow::Cow;

use ssql_lexer_core::DEFAULT_BLOCK_SIZE;

/// Initial capacity of a session's token vector.
pub const DEFAULT_TOKEN_CAPACITY: usize = 64;

/// How doubled delimiters inside a quoted construct are stored.
///
/// The scanner always treats a doubled delimiter (`""` inside a quoted
/// identifier, `''` inside a text literal) as an escaped delimiter that does
/// not terminate the construct. The policy only decides the stored text.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EscapePolicy {
    /// Store a single delimiter for each doubled pair: `"a""b"` → `a"b`.
    #[default]
    Collapse,
    /// Store the text between the outer delimiters verbatim: `'it''s'` → `it''s`.
    Preserve,
}

impl EscapePolicy {
    /// Apply the policy to the raw text between the outer delimiters.
    pub fn apply(self, raw: &str, quote: char) -> Cow<'_, str> {
        match self {
            EscapePolicy::Collapse if raw.contains(quote) => {
                let doubled = format!("{quote}{quote}");
                Cow::Owned(raw.replace(&doubled, quote.encode_utf8(&mut [0; 4])))
            }
            EscapePolicy::Collapse | EscapePolicy::Preserve => Cow::Borrowed(raw),
        }
    }
}

/// Options for a tokenizer [`Session`](crate::Session).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LexerConfig {
    /// Storage of `""` inside quoted identifiers.
    pub quoted_identifier_escapes: EscapePolicy,
    /// Storage of `''` inside text literals.
    pub text_literal_escapes: EscapePolicy,
    /// Capacity of each arena block.
    pub arena_block_size: usize,
    /// Initial capacity of the token vector.
    pub initial_token_capacity: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            quoted_identifier_escapes: EscapePolicy::Collapse,
            text_literal_escapes: EscapePolicy::Preserve,
            arena_block_size: DEFAULT_BLOCK_SIZE,
            initial_token_capacity: DEFAULT_TOKEN_CAPACITY,
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn with_quoted_identifier_escapes(mut self, policy: EscapePolicy) -> Self {
        self.quoted_identifier_escapes = policy;
        self
    }

    #[must_use]
    pub fn with_text_literal_escapes(mut self, policy: EscapePolicy) -> Self {
        self.text_literal_escapes = policy;
        self
    }

    #[must_use]
    pub fn with_arena_block_size(mut self, size: usize) -> Self {
        self.arena_block_size = size;
        self
    }

    #[must_use]
    pub fn with_initial_token_capacity(mut self, capacity: usize) -> Self {
        self.initial_token_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LexerConfig::default();
        assert_eq!(config.quoted_identifier_escapes, EscapePolicy::Collapse);
        assert_eq!(config.text_literal_escapes, EscapePolicy::Preserve);
        assert_eq!(config.arena_block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(config.initial_token_capacity, DEFAULT_TOKEN_CAPACITY);
    }

    #[test]
    fn builder_overrides() {
        let config = LexerConfig::default()
            .with_text_literal_escapes(EscapePolicy::Collapse)
            .with_quoted_identifier_escapes(EscapePolicy::Preserve)
            .with_arena_block_size(128)
            .with_initial_token_capacity(8);
        assert_eq!(config.text_literal_escapes, EscapePolicy::Collapse);
        assert_eq!(config.quoted_identifier_escapes, EscapePolicy::Preserve);
        assert_eq!(config.arena_block_size, 128);
        assert_eq!(config.initial_token_capacity, 8);
    }

    #[test]
    fn collapse_halves_doubled_delimiters() {
        assert_eq!(EscapePolicy::Collapse.apply("a\"\"b", '"'), "a\"b");
        assert_eq!(EscapePolicy::Collapse.apply("it''s", '\''), "it's");
        assert_eq!(EscapePolicy::Collapse.apply("''''", '\''), "''");
    }

    #[test]
    fn collapse_without_delimiters_borrows() {
        assert!(matches!(
            EscapePolicy::Collapse.apply("plain", '\''),
            Cow::Borrowed("plain")
        ));
    }

    #[test]
    fn preserve_keeps_text() {
        assert_eq!(EscapePolicy::Preserve.apply("it''s", '\''), "it''s");
    }
}
