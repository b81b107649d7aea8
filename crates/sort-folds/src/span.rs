//! Line spans.
//!
//! [`FoldSpan`] is a plain value: it only records where a fold sits. Reading or writing the
//! lines it covers always goes through an explicit buffer or [`crate::BufferSnapshot`], so the
//! difference between the live buffer and the pre-mutation copy stays visible at call sites.

use crate::error::{Result, SortFoldsError};
use std::fmt;
use std::ops::Range;

/// The extent of one fold: zero-based lines `start..end` (end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FoldSpan {
    start: usize,
    end: usize,
}

impl FoldSpan {
    /// Create a span, rejecting `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(SortFoldsError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// First line of the fold.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last line of the fold.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no lines.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The covered lines as a range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if `line` lies within the span.
    pub fn contains_line(&self, line: usize) -> bool {
        self.start <= line && line < self.end
    }
}

impl fmt::Display for FoldSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A selected range of zero-based lines, `start..end` (end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
    /// First selected line.
    pub start: usize,
    /// One past the last selected line.
    pub end: usize,
}

impl LineRange {
    /// Create a range; bounds given in either order are normalized.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Create a range from an inclusive pair of lines, as reported by hosts that track the
    /// first and last selected line (e.g. a visual-line selection).
    pub fn inclusive(first: usize, last: usize) -> Self {
        Self::new(first.min(last), first.max(last).saturating_add(1))
    }

    /// Number of selected lines.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether no line is selected.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if `line` is selected.
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line < self.end
    }

    /// Check if the range shares at least one line with `span`.
    pub fn intersects(&self, span: &FoldSpan) -> bool {
        span.start() < self.end && self.start < span.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_rejects_inverted_bounds() {
        assert_eq!(
            FoldSpan::new(5, 3),
            Err(SortFoldsError::InvalidSpan { start: 5, end: 3 })
        );

        let empty = FoldSpan::new(4, 4).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_span_contains_is_half_open() {
        let span = FoldSpan::new(2, 5).unwrap();
        assert!(!span.contains_line(1));
        assert!(span.contains_line(2));
        assert!(span.contains_line(4));
        assert!(!span.contains_line(5));
        assert_eq!(span.to_string(), "2..5");
    }

    #[test]
    fn test_line_range_inclusive_and_normalized() {
        assert_eq!(LineRange::inclusive(3, 1), LineRange { start: 1, end: 4 });
        assert_eq!(LineRange::new(7, 2), LineRange { start: 2, end: 7 });
        assert_eq!(
            LineRange::inclusive(4, usize::MAX),
            LineRange {
                start: 4,
                end: usize::MAX
            }
        );

        let range = LineRange::new(2, 6);
        assert!(range.intersects(&FoldSpan::new(0, 3).unwrap()));
        assert!(range.intersects(&FoldSpan::new(5, 9).unwrap()));
        assert!(!range.intersects(&FoldSpan::new(6, 9).unwrap()));
        assert!(!range.intersects(&FoldSpan::new(0, 2).unwrap()));
    }
}
