//! Byte cursor over the query source with line/column accounting.
//!
//! The cursor advances through the source byte-by-byte. Every consumed
//! `\n` bumps the line counter and moves the start-of-line offset, so the
//! column of any position is `offset - line_start`.
//!
//! # End of Input
//!
//! [`current()`](Cursor::current) and the lookahead helpers return `0x00`
//! once they run past the source. Callers that need to distinguish an
//! interior NUL from end-of-input check [`at_end()`](Cursor::at_end) first.

use std::fmt;

/// A position in the source: byte offset plus 0-based line and column.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SourcePos {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 0-based line number.
    pub line: u32,
    /// Byte offset from the start of the line.
    pub column: u32,
}

impl SourcePos {
    #[inline]
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        SourcePos {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (byte {})",
            self.line, self.column, self.offset
        )
    }
}

/// Whitespace as classified by C's `isspace` in the "C" locale:
/// space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Differs from [`u8::is_ascii_whitespace`] by also accepting vertical tab.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Cursor over a borrowed source string.
///
/// The cursor is [`Copy`], so classifiers can snapshot it before a
/// speculative scan and restore it when they decline.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
    /// Number of newlines consumed so far.
    line: u32,
    /// Byte offset of the first byte of the current line.
    line_start: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0, line 0.
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            line: 0,
            line_start: 0,
        }
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Returns the byte under the cursor, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek_nth(0)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_nth(1)
    }

    /// Returns the byte `n` positions ahead of current (`0x00` past the end).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> u8 {
        self.source
            .as_bytes()
            .get(self.pos.saturating_add(n))
            .copied()
            .unwrap_or(0)
    }

    /// Consume one byte.
    ///
    /// Consuming `\n` starts a new line. At end of input this is a no-op.
    #[inline]
    pub fn advance(&mut self) {
        if self.at_end() {
            return;
        }
        let byte = self.current();
        self.pos += 1;
        if byte == b'\n' {
            self.line = self.line.saturating_add(1);
            self.line_start = self.pos;
        }
    }

    /// Consume every byte up to (not including) `target`.
    ///
    /// Equivalent to calling [`advance()`](Self::advance) until the offset
    /// reaches `target`, but counts newlines with `memchr` instead of
    /// stepping. Targets behind the cursor are ignored; targets past the
    /// end clamp to the end.
    pub fn advance_to(&mut self, target: usize) {
        let target = target.min(self.source.len());
        if target <= self.pos {
            return;
        }
        let skipped = &self.source.as_bytes()[self.pos..target];
        if let Some(last) = memchr::memrchr(b'\n', skipped) {
            let newlines = memchr::memchr_iter(b'\n', skipped).count();
            self.line = self
                .line
                .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
            self.line_start = self.pos + last + 1;
        }
        self.pos = target;
    }

    /// Advance while `pred` holds for the current byte and input remains.
    #[inline]
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.at_end() && pred(self.current()) {
            self.advance();
        }
    }

    /// Absolute offset of the next `needle` at or after the cursor.
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr::memchr(needle, self.rest()).map(|i| self.pos + i)
    }

    /// Absolute offset of the next `first, second` byte pair at or after
    /// the cursor.
    pub fn find_pair(&self, first: u8, second: u8) -> Option<usize> {
        memchr::memmem::find(self.rest(), &[first, second]).map(|i| self.pos + i)
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        self.source.as_bytes().get(self.pos..).unwrap_or_default()
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Current 0-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column: bytes since the start of the line.
    #[inline]
    pub fn column(&self) -> u32 {
        u32::try_from(self.pos - self.line_start).unwrap_or(u32::MAX)
    }

    /// Snapshot of offset, line and column.
    #[inline]
    pub fn position(&self) -> SourcePos {
        SourcePos::new(self.pos, self.line, self.column())
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract `start..end` of the source.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character
    /// boundaries. Token boundaries always sit next to ASCII bytes, so
    /// ranges produced by the classifiers satisfy this. A range that does
    /// not yields the empty string.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source.len(),
            "slice end {end} exceeds source length {}",
            self.source.len()
        );
        self.source.get(start..end).unwrap_or_default()
    }

    /// Extract the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }
}
