//! Error types.

use crate::span::FoldSpan;
use thiserror::Error;

/// Errors produced while discovering or reordering folds.
///
/// Finding fewer than two folds is not an error, and neither is a motion that fails to move
/// the cursor: both simply end the operation early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortFoldsError {
    /// A fold span was constructed with `start > end`.
    #[error("invalid fold span: start {start} is greater than end {end}")]
    InvalidSpan {
        /// Requested start line.
        start: usize,
        /// Requested end line (exclusive).
        end: usize,
    },

    /// The key index does not address a line inside some fold.
    #[error("key index {key_index} is out of range for fold {span} ({len} lines)")]
    KeyIndexOutOfRange {
        /// Requested key index.
        key_index: usize,
        /// The first fold too short for `key_index`.
        span: FoldSpan,
        /// Number of lines in `span`.
        len: usize,
    },

    /// Fold spans handed to reordering are not in increasing buffer order or overlap.
    #[error("fold {span} does not start after fold {previous}")]
    UnorderedSpans {
        /// The span before `span` in the input.
        previous: FoldSpan,
        /// The first span starting before `previous` ends.
        span: FoldSpan,
    },

    /// A buffer access addressed lines outside the buffer.
    #[error("line range {start}..{end} is out of bounds for a buffer of {line_count} lines")]
    InvalidRange {
        /// Inclusive start line.
        start: usize,
        /// Exclusive end line.
        end: usize,
        /// Number of lines in the buffer.
        line_count: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = SortFoldsError> = std::result::Result<T, E>;
