//! Host interface
//!
//! The editor hosting the command implements these traits. [`TextBuffer`] is the line-level
//! view of the document; [`FoldNavigator`] is the cursor, the selection and the fold state,
//! which many editors only expose through motions.

use crate::cursor::Motion;
use crate::error::{Result, SortFoldsError};
use crate::span::LineRange;
use std::cmp::Ordering;

/// Cursor position (zero-based line and column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the line.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Line-addressable, mutable document buffer.
pub trait TextBuffer {
    /// Number of lines in the buffer.
    fn line_count(&self) -> usize;

    /// Text of line `index` without its line terminator.
    fn line(&self, index: usize) -> Option<String>;

    /// Lines `start..end`.
    fn lines(&self, start: usize, end: usize) -> Result<Vec<String>>;

    /// Replace lines `start..end` with `lines`. The replacement may have a different length.
    fn replace_lines(&mut self, start: usize, end: usize, lines: Vec<String>) -> Result<()>;
}

/// Cursor, selection and fold state of the editor view.
pub trait FoldNavigator {
    /// Current cursor position.
    fn cursor(&self) -> Position;

    /// Move the cursor to `position`.
    fn set_cursor(&mut self, position: Position);

    /// Execute one motion against the current cursor and return the line it ends on.
    ///
    /// A motion that cannot be performed leaves the cursor in place.
    fn run_motion(&mut self, motion: Motion) -> usize;

    /// Nesting depth of folds enclosing `line`; `0` when the line is not folded.
    fn fold_level(&self, line: usize) -> usize;

    /// The selected lines (end exclusive).
    fn selection(&self) -> LineRange;
}

/// Everything `sort_folds` needs from an editor.
pub trait FoldHost: TextBuffer + FoldNavigator {}

impl<T: TextBuffer + FoldNavigator + ?Sized> FoldHost for T {}

/// Validate `start..end` against a buffer of `line_count` lines.
pub fn check_range(start: usize, end: usize, line_count: usize) -> Result<()> {
    if start > end || end > line_count {
        return Err(SortFoldsError::InvalidRange {
            start,
            end,
            line_count,
        });
    }
    Ok(())
}

impl TextBuffer for Vec<String> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<String> {
        self.get(index).cloned()
    }

    fn lines(&self, start: usize, end: usize) -> Result<Vec<String>> {
        check_range(start, end, self.len())?;
        Ok(self[start..end].to_vec())
    }

    fn replace_lines(&mut self, start: usize, end: usize, lines: Vec<String>) -> Result<()> {
        check_range(start, end, self.len())?;
        self.splice(start..end, lines);
        Ok(())
    }
}
