//! Tokenizer session and driver.
//!
//! A [`Session`] exclusively owns the cursor, the text arena and the token
//! vector. [`Session::tokenize`] runs the driver state machine to
//! completion or to the first fault:
//!
//! ```text
//! Scanning ──▶ SkippingWhitespace ──▶ Dispatching ──▶ Scanning
//!    │                                    │
//!    ▼                                    ▼
//!   Done                               Faulted
//! ```
//!
//! Dropping the session releases the arena and the tokens together, on the
//! success and fault paths alike.

use std::fmt;

use ssql_lexer_core::{is_whitespace, TextArena};
use tracing::{debug, trace};

use crate::classify::{Scan, ScanContext, CLASSIFIERS};
use crate::{LexError, LexerConfig, Token};

/// Observable progress of a session.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SessionState {
    /// Created, not yet tokenized.
    Ready,
    /// All input consumed without a fault.
    Done,
    /// Stopped at the first fault; earlier tokens remain available.
    Faulted(LexError),
}

/// Driver states within a single `tokenize` run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Phase {
    Scanning,
    SkippingWhitespace,
    Dispatching,
    Done,
    Faulted(LexError),
}

/// A tokenizer run over one source string.
pub struct Session<'src> {
    scan: ScanContext<'src>,
    tokens: Vec<Token>,
    state: SessionState,
}

impl<'src> Session<'src> {
    /// Create a session with the default configuration.
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src str, config: LexerConfig) -> Self {
        Session {
            scan: ScanContext::new(source, config),
            tokens: Vec::with_capacity(config.initial_token_capacity),
            state: SessionState::Ready,
        }
    }

    /// Run the tokenizer to completion or to the first fault.
    ///
    /// Calling this again after it finished returns the same outcome
    /// without rescanning.
    pub fn tokenize(&mut self) -> Result<(), LexError> {
        match self.state {
            SessionState::Ready => {}
            SessionState::Done => return Ok(()),
            SessionState::Faulted(err) => return Err(err),
        }

        let mut phase = Phase::Scanning;
        loop {
            phase = match phase {
                Phase::Scanning => {
                    if self.scan.cursor.at_end() {
                        Phase::Done
                    } else {
                        Phase::SkippingWhitespace
                    }
                }
                Phase::SkippingWhitespace => {
                    self.scan.cursor.skip_while(is_whitespace);
                    if self.scan.cursor.at_end() {
                        Phase::Done
                    } else {
                        Phase::Dispatching
                    }
                }
                Phase::Dispatching => match self.dispatch() {
                    Ok(()) => Phase::Scanning,
                    Err(err) => Phase::Faulted(err),
                },
                Phase::Done => {
                    debug!(
                        tokens = self.tokens.len(),
                        arena_bytes = self.scan.arena.allocated_bytes(),
                        arena_blocks = self.scan.arena.block_count(),
                        "tokenize done"
                    );
                    self.state = SessionState::Done;
                    return Ok(());
                }
                Phase::Faulted(err) => {
                    debug!(
                        kind = %err.kind,
                        offset = err.pos.offset,
                        line = err.pos.line,
                        column = err.pos.column,
                        tokens = self.tokens.len(),
                        "tokenize faulted"
                    );
                    self.state = SessionState::Faulted(err);
                    return Err(err);
                }
            };
        }
    }

    /// Try each classifier in priority order at the cursor.
    fn dispatch(&mut self) -> Result<(), LexError> {
        for classifier in CLASSIFIERS {
            match classifier.classify(&mut self.scan)? {
                Scan::Declined => {}
                Scan::Skipped => {
                    trace!(
                        classifier = classifier.name(),
                        offset = self.scan.cursor.offset(),
                        "skip"
                    );
                    return Ok(());
                }
                Scan::Emitted(token) => {
                    trace!(
                        classifier = classifier.name(),
                        kind = %token.kind,
                        offset = token.pos.offset,
                        line = token.pos.line,
                        column = token.pos.column,
                        "token"
                    );
                    self.tokens.push(token);
                    return Ok(());
                }
            }
        }
        Err(LexError::unexpected_character(self.scan.cursor.position()))
    }

    /// Tokens produced so far, in source order.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Resolve a token's arena text. `None` for payload-less kinds.
    pub fn text(&self, token: &Token) -> Option<&str> {
        token.text.and_then(|text| self.scan.arena.text(text))
    }

    /// Render a token as `KindName` or `KindName(text)`.
    pub fn display<'a>(&'a self, token: &'a Token) -> TokenDisplay<'a> {
        TokenDisplay {
            token,
            text: self.text(token),
        }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The arena owning identifier and literal text.
    pub fn arena(&self) -> &TextArena {
        &self.scan.arena
    }

    pub fn config(&self) -> &LexerConfig {
        &self.scan.config
    }

    /// Consume the session, releasing the arena and the tokens.
    pub fn finish(self) -> SessionState {
        self.state
    }
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("offset", &self.scan.cursor.offset())
            .field("tokens", &self.tokens.len())
            .field("arena_bytes", &self.scan.arena.allocated_bytes())
            .finish()
    }
}

/// Human-readable rendering of one token.
#[derive(Copy, Clone, Debug)]
pub struct TokenDisplay<'a> {
    token: &'a Token,
    text: Option<&'a str>,
}

impl fmt::Display for TokenDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text {
            Some(text) => write!(f, "{}({text})", self.token.kind),
            None => write!(f, "{}", self.token.kind),
        }
    }
}
