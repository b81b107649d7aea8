//! Command entry point
//!
//! `sort_folds` is the single command exposed to the host: discover the folds of the current
//! selection, reorder them, and re-close the folds so the result reads as a list of sorted
//! closed folds.
//!
//! # Example
//!
//! ```rust,ignore
//! use sort_folds::sort_folds;
//!
//! // `editor` implements `TextBuffer + FoldNavigator`.
//! let outcome = sort_folds(&mut editor, 0)?;
//! println!("sorted {} folds", outcome.spans.len());
//! ```

use crate::cursor::{Motion, apply_motion, apply_motions, fold_level};
use crate::discovery::discover;
use crate::error::Result;
use crate::host::{FoldHost, FoldNavigator};
use crate::reorder::reorder;
use crate::span::FoldSpan;
use tracing::debug;

/// Options for [`sort_folds_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortFoldsOptions {
    /// Which line of each fold supplies the sort key (`0` is the fold's first line).
    pub key_index: usize,
}

/// What a `sort_folds` invocation did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOutcome {
    /// The folds found in the selection, in their original buffer order.
    pub spans: Vec<FoldSpan>,
    /// Number of fold positions that received a different block.
    pub rewritten: usize,
}

impl SortOutcome {
    /// Whether enough folds were found for sorting to take place.
    pub fn sorted(&self) -> bool {
        self.spans.len() > 1
    }
}

/// Sort the folds intersecting the host's selection by line `key_index` of each fold.
pub fn sort_folds<H: FoldHost + ?Sized>(host: &mut H, key_index: usize) -> Result<SortOutcome> {
    sort_folds_with(host, &SortFoldsOptions { key_index })
}

/// Sort the folds intersecting the host's selection using `options`.
///
/// Selections with fewer than two folds leave the buffer untouched. The cursor is back at its
/// original position when this returns, including on error.
pub fn sort_folds_with<H: FoldHost + ?Sized>(
    host: &mut H,
    options: &SortFoldsOptions,
) -> Result<SortOutcome> {
    let selection = host.selection();
    let spans = discover(host, selection)?;

    let mut outcome = SortOutcome {
        spans,
        rewritten: 0,
    };
    if !outcome.sorted() {
        debug!(?selection, folds = outcome.spans.len(), "nothing to sort");
        return Ok(outcome);
    }

    outcome.rewritten = reorder(&outcome.spans, options.key_index, host)?;
    present_result(host);
    Ok(outcome)
}

/// Re-close the folds around the cursor after sorting.
///
/// Re-applies the fold level and closes the fold under the cursor recursively; when that fold
/// is nested, its parents are opened again so the sorted siblings stay visible as closed folds.
pub fn present_result<H: FoldNavigator + ?Sized>(host: &mut H) {
    let line = apply_motions(
        host,
        &[Motion::ReapplyFoldLevel, Motion::CloseFoldsRecursively],
    );
    let level = fold_level(host, line);
    if level > 1 {
        apply_motion(host, Some(Motion::OpenFolds(level - 1)));
    }
}
