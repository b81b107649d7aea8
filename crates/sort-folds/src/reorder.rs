//! Fold reordering
//!
//! Sorts fold blocks by the lowercased text of their key line and rewrites the buffer so each
//! original fold position receives the block that sorts into it.
//!
//! Reads always come from a [`BufferSnapshot`] taken before the first write, and writes always
//! target the positions of the original spans. Positions are rewritten from last to first so a
//! replacement that changes the line count never shifts a destination still to be written.

use crate::error::{Result, SortFoldsError};
use crate::host::TextBuffer;
use crate::snapshot::BufferSnapshot;
use crate::span::FoldSpan;
use tracing::debug;

/// Reorder the folds at `spans` in `buffer` by line `key_index` of each fold.
///
/// `spans` must be disjoint and in increasing buffer order, as [`crate::discover`] returns them.
///
/// Fewer than two spans is a no-op. The span order and the key index are validated before the
/// buffer is touched, so invalid input leaves the buffer unmodified.
///
/// Returns the number of fold positions that received a different block.
pub fn reorder<B: TextBuffer + ?Sized>(
    spans: &[FoldSpan],
    key_index: usize,
    buffer: &mut B,
) -> Result<usize> {
    if spans.len() < 2 {
        return Ok(0);
    }
    check_span_order(spans)?;
    check_key_index(spans, key_index)?;

    let snapshot = BufferSnapshot::capture(buffer)?;
    let sorted = sort_order(spans, key_index, &snapshot)?;

    let mut rewritten = 0;
    for (original, replacement) in spans.iter().zip(&sorted).rev() {
        if original == replacement {
            continue;
        }
        let lines = snapshot.span_lines(*replacement)?.to_vec();
        buffer.replace_lines(original.start(), original.end(), lines)?;
        rewritten += 1;
    }

    debug!(folds = spans.len(), rewritten, key_index, "reordered folds");
    Ok(rewritten)
}

/// The spans ordered by the lowercased key line, read from `snapshot`.
///
/// The sort is stable: spans with equal keys keep their relative order.
pub fn sort_order(
    spans: &[FoldSpan],
    key_index: usize,
    snapshot: &BufferSnapshot,
) -> Result<Vec<FoldSpan>> {
    let mut keyed = spans
        .iter()
        .map(|span| Ok((snapshot.key_line(*span, key_index)?.to_lowercase(), *span)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    Ok(keyed.into_iter().map(|(_, span)| span).collect())
}

fn check_span_order(spans: &[FoldSpan]) -> Result<()> {
    match spans.windows(2).find(|pair| pair[1].start() < pair[0].end()) {
        Some(pair) => Err(SortFoldsError::UnorderedSpans {
            previous: pair[0],
            span: pair[1],
        }),
        None => Ok(()),
    }
}

fn check_key_index(spans: &[FoldSpan], key_index: usize) -> Result<()> {
    match spans.iter().find(|span| key_index >= span.len()) {
        Some(span) => Err(SortFoldsError::KeyIndexOutOfRange {
            key_index,
            span: *span,
            len: span.len(),
        }),
        None => Ok(()),
    }
}
