//! Buffer snapshot
//!
//! An immutable copy of every buffer line, taken before the buffer is mutated. Reordering reads
//! fold contents from the snapshot only, so a write can never clobber lines that still have to
//! be read.

use crate::error::{Result, SortFoldsError};
use crate::host::{TextBuffer, check_range};
use crate::span::FoldSpan;

/// Immutable copy of a buffer's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    lines: Vec<String>,
}

impl BufferSnapshot {
    /// Copy the full contents of `buffer`.
    pub fn capture<B: TextBuffer + ?Sized>(buffer: &B) -> Result<Self> {
        Ok(Self {
            lines: buffer.lines(0, buffer.line_count())?,
        })
    }

    /// Build a snapshot from owned lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Number of lines captured.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All captured lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines covered by `span`.
    pub fn span_lines(&self, span: FoldSpan) -> Result<&[String]> {
        check_range(span.start(), span.end(), self.lines.len())?;
        Ok(&self.lines[span.range()])
    }

    /// Line `key_index` of the fold covered by `span`.
    pub fn key_line(&self, span: FoldSpan, key_index: usize) -> Result<&str> {
        let lines = self.span_lines(span)?;
        lines
            .get(key_index)
            .map(String::as_str)
            .ok_or(SortFoldsError::KeyIndexOutOfRange {
                key_index,
                span,
                len: span.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(lines: &[&str]) -> BufferSnapshot {
        BufferSnapshot::from_lines(lines.iter().map(|line| line.to_string()).collect())
    }

    #[test]
    fn test_capture_is_detached_from_buffer() {
        let mut buffer: Vec<String> = vec!["one".into(), "two".into()];
        let snap = BufferSnapshot::capture(&buffer).unwrap();

        buffer[0] = "changed".to_string();

        assert_eq!(snap.lines(), ["one", "two"]);
        assert_eq!(snap.line_count(), 2);
    }

    #[test]
    fn test_key_line_lookup() {
        let snap = snapshot(&["a", "{{{ x", "body", "}}}"]);
        let span = FoldSpan::new(1, 4).unwrap();

        assert_eq!(snap.key_line(span, 0).unwrap(), "{{{ x");
        assert_eq!(snap.key_line(span, 1).unwrap(), "body");
        assert_eq!(
            snap.key_line(span, 3),
            Err(SortFoldsError::KeyIndexOutOfRange {
                key_index: 3,
                span,
                len: 3
            })
        );
    }

    #[test]
    fn test_span_past_end_is_invalid_range() {
        let snap = snapshot(&["a", "b"]);
        let span = FoldSpan::new(1, 4).unwrap();

        assert_eq!(
            snap.span_lines(span),
            Err(SortFoldsError::InvalidRange {
                start: 1,
                end: 4,
                line_count: 2
            })
        );
    }
}
