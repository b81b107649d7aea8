//! Cursor/Motion adapter
//!
//! Wraps the host's "run a motion, report the line" and "fold level at line" primitives, and
//! provides [`ScopedCursor`], a guard that puts the cursor back where it was when the guard
//! is dropped.
//!
//! Motions may open or close folds as a side effect. The guard restores the cursor only; the
//! fold open/closed state is left as the motions made it.

use crate::host::{FoldNavigator, Position};
use std::fmt;
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// One atomic navigation command understood by the host.
///
/// Each motion corresponds to a vim normal-mode command, available through [`Motion::keys`],
/// so a bridge to a real vim can forward it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Jump to the given zero-based line (`{n}G`).
    GotoLine(usize),
    /// Move down to the start of the next fold; a closed fold counts as one fold (`zj`).
    NextFoldStart,
    /// Move to the start of the current open fold, or to the start of its parent when already
    /// there (`[z`).
    CurrentFoldStart,
    /// Move to the end of the current open fold, or to the end of its parent when already
    /// there (`]z`).
    CurrentFoldEnd,
    /// Open one fold under the cursor (`zo`).
    OpenFold,
    /// Open `n` levels of folds under the cursor (`{n}zo`).
    OpenFolds(usize),
    /// Close all folds under the cursor recursively (`zC`).
    CloseFoldsRecursively,
    /// Discard manual open/close and re-apply the fold level (`zX`).
    ReapplyFoldLevel,
}

impl Motion {
    /// The vim normal-mode keys performing this motion.
    pub fn keys(&self) -> String {
        match self {
            Motion::GotoLine(line) => format!("{}G", line + 1),
            Motion::NextFoldStart => "zj".to_string(),
            Motion::CurrentFoldStart => "[z".to_string(),
            Motion::CurrentFoldEnd => "]z".to_string(),
            Motion::OpenFold => "zo".to_string(),
            Motion::OpenFolds(count) => format!("{count}zo"),
            Motion::CloseFoldsRecursively => "zC".to_string(),
            Motion::ReapplyFoldLevel => "zX".to_string(),
        }
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keys())
    }
}

/// Run `motion` if given and return the cursor's line afterwards.
///
/// `None` samples the current line without moving.
pub fn apply_motion<H: FoldNavigator + ?Sized>(host: &mut H, motion: Option<Motion>) -> usize {
    match motion {
        Some(motion) => {
            let line = host.run_motion(motion);
            trace!(%motion, line, "motion");
            line
        }
        None => host.cursor().line,
    }
}

/// Run `motions` in order and return the line the cursor ends on.
pub fn apply_motions<H: FoldNavigator + ?Sized>(host: &mut H, motions: &[Motion]) -> usize {
    motions
        .iter()
        .fold(host.cursor().line, |_, motion| apply_motion(host, Some(*motion)))
}

/// Fold nesting depth at `line`; `0` means unfolded.
pub fn fold_level<H: FoldNavigator + ?Sized>(host: &H, line: usize) -> usize {
    host.fold_level(line)
}

/// Restores the host cursor when dropped.
///
/// The position is captured on construction. Dropping the guard (normal return, early
/// return, `?` propagation or unwinding) moves the cursor back to that exact position. The
/// guard dereferences to the host, so exploratory motions run through it.
pub struct ScopedCursor<'a, H: FoldNavigator + ?Sized> {
    host: &'a mut H,
    saved: Position,
}

impl<'a, H: FoldNavigator + ?Sized> ScopedCursor<'a, H> {
    /// Capture the current cursor of `host`.
    pub fn new(host: &'a mut H) -> Self {
        let saved = host.cursor();
        Self { host, saved }
    }

    /// The position that will be restored.
    pub fn saved(&self) -> Position {
        self.saved
    }
}

impl<H: FoldNavigator + ?Sized> Deref for ScopedCursor<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: FoldNavigator + ?Sized> DerefMut for ScopedCursor<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: FoldNavigator + ?Sized> Drop for ScopedCursor<'_, H> {
    fn drop(&mut self) {
        trace!(line = self.saved.line, column = self.saved.column, "restore cursor");
        self.host.set_cursor(self.saved);
    }
}
