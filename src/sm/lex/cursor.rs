//! A cursor walking over `;`-terminated statements.

use std::{borrow::Cow, ops::Range};

use super::{LexWarning, LexWarningWithRange};
use crate::sm::command::mixin::{SourceRangeMixin, SourceRangeMixinExt};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A statement with its comments removed and surrounding whitespace trimmed.
pub type Statement<'a> = SourceRangeMixin<Cow<'a, str>>;

/// A restartable iterator over the statements of a source.
///
/// A statement is everything between the end of the previous `;` and the next one. Line comments
/// (`//` until the end of the line) are removed before looking for `;`, so a `;` inside a comment
/// does not end the statement. Line breaks inside a statement are preserved because the note grid
/// is line-delimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<'a> {
    /// The index position.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the beginning of `source`, past its byte order mark if any.
    ///
    /// Indices stay relative to `source` including the mark.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let index = if source.starts_with(BYTE_ORDER_MARK) {
            BYTE_ORDER_MARK.len_utf8()
        } else {
            0
        };
        Self { index, source }
    }

    /// Returns the current byte index in the source string.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if no more statement or warning will be yielded.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.clone().next().is_none()
    }

    /// Moves the cursor through the next statement, and returns it with its range.
    ///
    /// Blank statements such as `;;` are skipped. Content left after the last `;` is consumed and
    /// reported as [`LexWarning::UnterminatedStatement`] unless it is blank.
    pub fn next_statement(&mut self) -> Option<Result<Statement<'a>, LexWarningWithRange>> {
        while self.index < self.source.len() {
            let start = self.index;
            let rest = &self.source[start..];
            let (end, segments) = scan_statement(rest);
            let Some(end) = end else {
                self.index = self.source.len();
                let span = content_span(rest, &segments)?;
                return Some(Err(LexWarning::UnterminatedStatement
                    .into_wrapper_range(start + span.start..start + span.end)));
            };
            // Skip the `;` too.
            self.index = start + end + 1;

            let Some(span) = content_span(rest, &segments) else {
                continue;
            };
            let text = trim_cow(join_segments(rest, &segments));
            return Some(Ok(
                text.into_wrapper_range(start + span.start..start + span.end)
            ));
        }
        None
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = Result<Statement<'a>, LexWarningWithRange>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_statement()
    }
}

/// Finds the `;` ending the statement at the head of `rest`.
///
/// Returns the index of the `;`, or `None` if the statement is not terminated, and the ranges of
/// `rest` outside of comments.
fn scan_statement(rest: &str) -> (Option<usize>, Vec<Range<usize>>) {
    let mut segments = vec![];
    let mut segment_start = 0;
    let mut pos = 0;
    loop {
        let Some(found) = rest[pos..].find([';', '/']) else {
            segments.push(segment_start..rest.len());
            return (None, segments);
        };
        let at = pos + found;
        if rest[at..].starts_with(';') {
            segments.push(segment_start..at);
            return (Some(at), segments);
        }
        if rest[at..].starts_with("//") {
            segments.push(segment_start..at);
            let line_end = rest[at..].find('\n').map_or(rest.len(), |i| at + i);
            segment_start = line_end;
            pos = line_end;
        } else {
            pos = at + 1;
        }
    }
}

/// Concatenates the segments, borrowing when comments did not split the text.
fn join_segments<'a>(rest: &'a str, segments: &[Range<usize>]) -> Cow<'a, str> {
    match segments {
        [] => Cow::Borrowed(""),
        [only] => Cow::Borrowed(&rest[only.clone()]),
        many => Cow::Owned(
            many.iter()
                .map(|segment| &rest[segment.clone()])
                .collect::<String>(),
        ),
    }
}

fn trim_cow(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) if s.trim().len() == s.len() => Cow::Owned(s),
        Cow::Owned(s) => Cow::Owned(s.trim().to_owned()),
    }
}

/// The range of `rest` from the first to the last byte neither blank nor in a comment, or `None`
/// if the segments are blank.
fn content_span(rest: &str, segments: &[Range<usize>]) -> Option<Range<usize>> {
    let start = segments.iter().find_map(|segment| {
        let trimmed = rest[segment.clone()].trim_start();
        (!trimmed.is_empty()).then(|| segment.end - trimmed.len())
    })?;
    let end = segments.iter().rev().find_map(|segment| {
        let trimmed = rest[segment.clone()].trim_end();
        (!trimmed.is_empty()).then(|| segment.start + trimmed.len())
    })?;
    Some(start..end)
}
