//! Line (`--`) and block (`/* */`) comments. Neither produces a token.

use super::{Classifier, Scan, ScanContext};
use crate::LexError;

pub(crate) struct Comment;

impl Classifier for Comment {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn classify(&self, cx: &mut ScanContext<'_>) -> Result<Scan, LexError> {
        match (cx.cursor.current(), cx.cursor.peek()) {
            (b'-', b'-') => {
                line_comment(cx);
                Ok(Scan::Skipped)
            }
            (b'/', b'*') => block_comment(cx).map(|()| Scan::Skipped),
            _ => Ok(Scan::Declined),
        }
    }
}

/// Skip through the end of the line, newline included.
fn line_comment(cx: &mut ScanContext<'_>) {
    let end = cx
        .cursor
        .find(b'\n')
        .map_or(cx.cursor.source_len(), |newline| newline + 1);
    cx.cursor.advance_to(end);
}

/// Skip through the first `*/`.
fn block_comment(cx: &mut ScanContext<'_>) -> Result<(), LexError> {
    let start = cx.cursor.position();
    cx.cursor.advance_to(start.offset + 2);

    match cx.cursor.find_pair(b'*', b'/') {
        Some(close) => {
            cx.cursor.advance_to(close + 2);
            Ok(())
        }
        None => {
            cx.cursor.advance_to(cx.cursor.source_len());
            Err(LexError::unclosed_comment_block(
                start,
                cx.cursor.position(),
            ))
        }
    }
}
