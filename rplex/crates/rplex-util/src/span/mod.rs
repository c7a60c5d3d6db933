//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] attached to emitted tokens and the
//! [`LineIndex`] that turns byte offsets into human-readable line/column
//! pairs.
//!
//! # Examples
//!
//! ```
//! use rplex_util::span::{LineIndex, Span};
//!
//! let index = LineIndex::new("ab\ncd");
//! assert_eq!(index.span(3, 5), Span::new(3, 5, 2, 1));
//! ```

use std::cell::Cell;

/// Source location span
///
/// A `Span` represents a range of the input, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of `start` (for human-readable output)
///
/// # Examples
///
/// ```
/// use rplex_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.len(), 10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in the input
    pub start: usize,
    /// End byte offset in the input (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
    /// Column number of `start` (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for tokens that were never emitted
    ///
    /// # Examples
    ///
    /// ```
    /// use rplex_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use rplex_util::span::Span;
    ///
    /// assert!(Span::new(4, 4, 1, 5).is_empty());
    /// assert!(!Span::new(4, 6, 1, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use rplex_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// Line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use rplex_util::span::Span;
    ///
    /// let a = Span::new(10, 20, 2, 1);
    /// let b = Span::new(25, 35, 2, 16);
    /// assert_eq!(a.merge(b), Span::new(10, 35, 2, 1));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

/// Precomputed line starts for one input text
///
/// Lookups are a binary search over the line-start table, so resolving a
/// token's location does not rescan the input from the beginning. The last
/// resolved location is remembered: a lookup further along the same line
/// only counts the characters in between, which keeps a left-to-right scan
/// over one very long line linear.
///
/// # Examples
///
/// ```
/// use rplex_util::span::LineIndex;
///
/// let index = LineIndex::new("line1\nline2\nline3");
/// assert_eq!(index.line_count(), 3);
/// assert_eq!(index.line_col(8), (2, 3));
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    /// The indexed text
    text: &'a str,
    /// Byte offset of the first byte of every line
    line_starts: Vec<usize>,
    /// Last resolved location
    last: Cell<LineCursor>,
}

/// A resolved location: byte offset, 0-based line and 0-based char column
#[derive(Clone, Copy, Debug, Default)]
struct LineCursor {
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> LineIndex<'a> {
    /// Build the line-start table for `text`
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );

        Self {
            text,
            line_starts,
            last: Cell::new(LineCursor::default()),
        }
    }

    /// Get the indexed text
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Get the total number of lines
    ///
    /// An empty text, and a text without a newline, has one line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    ///
    /// Returns `None` if the line number is out of bounds.
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to (line, column) coordinates
    ///
    /// Both are 1-based. The column counts characters, not bytes, from the
    /// start of the line. Offsets past the end of the text resolve against the
    /// last line.
    ///
    /// # Examples
    ///
    /// ```
    /// use rplex_util::span::LineIndex;
    ///
    /// let index = LineIndex::new("αβ\nγ");
    /// assert_eq!(index.line_col(4), (1, 3));
    /// assert_eq!(index.line_col(5), (2, 1));
    /// ```
    pub fn line_col(&self, offset: usize) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => return (to_u32(line + 1), 1),
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts[line];
        let last = self.last.get();
        let (from, base) = if last.line == line && last.offset <= offset {
            (last.offset, last.column)
        } else {
            (line_start, 0)
        };

        let column = match self.text.get(from..offset) {
            Some(between) => base + between.chars().count(),
            None => return (to_u32(line + 1), to_u32(offset.saturating_sub(line_start) + 1)),
        };
        self.last.set(LineCursor {
            offset,
            line,
            column,
        });

        (to_u32(line + 1), to_u32(column + 1))
    }

    /// Build a span for `start..end`, located at `start`
    pub fn span(&self, start: usize, end: usize) -> Span {
        let (line, column) = self.line_col(start);
        Span::new(start, end, line, column)
    }
}

/// Saturating conversion for line/column numbers
#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
