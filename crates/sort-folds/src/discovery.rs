//! Fold discovery
//!
//! Hosts rarely expose folds as data, so the sibling folds of a selection are recovered by
//! driving the cursor: jump to the first fold, open it, jump to its end, jump to the next fold,
//! and repeat while the next fold is still selected and sits at the same fold level.
//!
//! The whole walk runs under a single [`ScopedCursor`], so the caller's cursor is unchanged
//! afterwards whatever the outcome.

use crate::cursor::{Motion, ScopedCursor, apply_motion, apply_motions, fold_level};
use crate::error::Result;
use crate::host::FoldNavigator;
use crate::span::{FoldSpan, LineRange};
use tracing::{debug, trace};

/// Find the sibling folds intersecting `selection`, in buffer order.
///
/// The first fold is the one enclosing `selection.start` (taken at the outermost position of
/// that fold level), or else the next fold starting inside the selection. Following folds are
/// collected while they start inside the selection at the same fold level as the first.
pub fn discover<H: FoldNavigator + ?Sized>(
    host: &mut H,
    selection: LineRange,
) -> Result<Vec<FoldSpan>> {
    let mut spans = Vec::new();
    if selection.is_empty() {
        return Ok(spans);
    }

    let mut host = ScopedCursor::new(host);

    let Some(mut fold_start) = move_to_first_fold(&mut host, selection) else {
        debug!(?selection, "no folds in selection");
        return Ok(spans);
    };
    let level = fold_level(&*host, fold_start);

    loop {
        let fold_end = move_to_fold_end(&mut host, fold_start, level);
        spans.push(FoldSpan::new(fold_start, fold_end + 1)?);

        let next = apply_motion(&mut *host, Some(Motion::NextFoldStart));
        if next <= fold_end {
            trace!(fold_end, "no fold after");
            break;
        }
        if !selection.contains(next) {
            trace!(next, "next fold outside selection");
            break;
        }
        let next_level = fold_level(&*host, next);
        if next_level != level {
            trace!(next, next_level, level, "next fold at a different level");
            break;
        }
        fold_start = next;
    }

    debug!(?selection, level, folds = spans.len(), "discovered folds");
    Ok(spans)
}

/// Place the cursor on the start of the first fold of `selection`, returning its line.
fn move_to_first_fold<H: FoldNavigator + ?Sized>(
    host: &mut ScopedCursor<'_, H>,
    selection: LineRange,
) -> Option<usize> {
    let line = apply_motion(&mut **host, Some(Motion::GotoLine(selection.start)));
    let level = fold_level(&**host, line);
    if level > 0 {
        return Some(outermost_fold_start(host, line, level));
    }

    let first = apply_motion(&mut **host, Some(Motion::NextFoldStart));
    if first > line && first < selection.end {
        Some(first)
    } else {
        None
    }
}

/// Open the fold at `fold_start` and place the cursor on its last line, returning that line.
///
/// `]z` on a fold that ends on its own first line moves on to the end of the enclosing fold.
/// A fold at `level` or shallower starting before the reported end shows that happened, and
/// the fold is then taken to end where it starts.
fn move_to_fold_end<H: FoldNavigator + ?Sized>(
    host: &mut ScopedCursor<'_, H>,
    fold_start: usize,
    level: usize,
) -> usize {
    let end = apply_motions(&mut **host, &[Motion::OpenFold, Motion::CurrentFoldEnd]);
    if end == fold_start {
        return end;
    }

    let overshot = {
        let mut probe = ScopedCursor::new(&mut **host);
        let mut line = apply_motion(&mut *probe, Some(Motion::GotoLine(fold_start)));
        loop {
            let next = apply_motion(&mut *probe, Some(Motion::NextFoldStart));
            if next <= line || next > end {
                break false;
            }
            if fold_level(&*probe, next) <= level {
                break true;
            }
            line = next;
        }
    };
    if !overshot {
        return end;
    }

    trace!(fold_start, end, "fold ends on its first line");
    apply_motion(&mut **host, Some(Motion::GotoLine(fold_start)))
}

/// Walk backwards with `[z` while the fold level stays at `level`.
///
/// Each step is probed under its own guard; a step that does not move the cursor up, or lands
/// on a different level, is undone and the walk stops.
fn outermost_fold_start<H: FoldNavigator + ?Sized>(
    host: &mut ScopedCursor<'_, H>,
    mut start: usize,
    level: usize,
) -> usize {
    const PROBE: [Motion; 2] = [Motion::OpenFold, Motion::CurrentFoldStart];

    loop {
        let candidate = {
            let mut probe = ScopedCursor::new(&mut **host);
            let candidate = apply_motions(&mut *probe, &PROBE);
            (candidate < start && fold_level(&*probe, candidate) == level).then_some(candidate)
        };
        match candidate {
            Some(_) => start = apply_motions(&mut **host, &PROBE),
            None => return start,
        }
    }
}
