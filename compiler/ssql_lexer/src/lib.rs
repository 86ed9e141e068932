//! Tokenizer for the SSQL query language.
//!
//! Converts query text into an ordered list of [`Token`]s. Identifier and
//! literal text is copied into a per-session [`TextArena`], so tokens stay
//! valid independently of how the caller keeps the source around.
//!
//! # Usage
//!
//! ```
//! use ssql_lexer::{Session, TokenKind};
//!
//! let mut session = Session::new("SELECT id FROM player;");
//! session.tokenize().unwrap();
//!
//! let kinds: Vec<_> = session.tokens().iter().map(|t| t.kind).collect();
//! assert_eq!(kinds[0], TokenKind::Select);
//! assert_eq!(session.text(&session.tokens()[1]), Some("id"));
//! ```
//!
//! # Architecture
//!
//! ```text
//! source → Cursor → [identifier, literal, comment, symbol] → Vec<Token>
//!                                  ↓
//!                              TextArena
//! ```
//!
//! The session driver skips whitespace, then offers the cursor to each
//! classifier in that fixed order. A classifier declines (consumes
//! nothing), produces a token, skips input (comments), or reports a
//! [`LexError`]. The first error stops tokenization.

mod classify;
mod config;
mod keywords;
mod lex_error;
mod session;
mod token;

pub use config::{EscapePolicy, LexerConfig, DEFAULT_TOKEN_CAPACITY};
pub use keywords::is_keyword;
pub use lex_error::{LexError, LexErrorKind};
pub use session::{Session, SessionState, TokenDisplay};
pub use token::{Token, TokenKind};

pub use ssql_lexer_core::{SourcePos, TextArena, TextRef};
