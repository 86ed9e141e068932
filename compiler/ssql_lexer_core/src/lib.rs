//! Low-level scanning primitives for the SSQL tokenizer.
//!
//! This crate has no knowledge of token kinds or keywords. It provides:
//!
//! - [`Cursor`]: byte cursor over the source with line/column accounting
//! - [`SourcePos`]: a `(offset, line, column)` snapshot
//! - [`TextArena`]: chained fixed-capacity blocks owning token text
//!
//! The `ssql_lexer` crate builds the classifiers and the tokenizer driver on
//! top of these.

mod arena;
mod cursor;

pub use arena::{Region, TextArena, TextRef, DEFAULT_BLOCK_SIZE};
pub use cursor::{is_whitespace, Cursor, SourcePos};
