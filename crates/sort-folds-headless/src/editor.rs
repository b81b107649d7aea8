//! Headless editor
//!
//! [`HeadlessEditor`] owns the document text, the marker folds and a cursor, and implements the
//! host traits of `sort-folds`. Motions follow the behavior of the matching vim commands:
//!
//! - `zj` moves to the next fold start below the cursor, skipping folds hidden inside a closed
//!   fold, so a closed fold counts as one fold.
//! - `[z` / `]z` move to the start / end of the innermost fold around the cursor, or of its
//!   parent when the cursor is already there.
//! - `zo`, `{n}zo`, `zC` and `zX` open, close and reset folds under the cursor.
//!
//! A motion that has nowhere to go leaves the cursor where it is. Replacing lines re-derives
//! the folds from the markers and re-applies the configured fold level.

use crate::config::HeadlessConfig;
use crate::folding::{FoldRegion, FoldingManager};
use crate::line_store::LineStore;
use crate::marker::parse_marker_folds;
use sort_folds::{FoldNavigator, LineRange, Motion, Position, Result, TextBuffer};
use tracing::{debug, trace};

/// In-memory editor with marker folds.
#[derive(Debug, Clone)]
pub struct HeadlessEditor {
    store: LineStore,
    folds: FoldingManager,
    cursor: Position,
    selection: LineRange,
    config: HeadlessConfig,
}

impl HeadlessEditor {
    /// Create an editor with the default configuration.
    pub fn new(text: &str) -> Self {
        Self::with_config(text, HeadlessConfig::default())
    }

    /// Create an editor; the selection initially covers the whole document.
    pub fn with_config(text: &str, config: HeadlessConfig) -> Self {
        let store = LineStore::from_text(text);
        let selection = LineRange::new(0, store.line_count());
        let mut editor = Self {
            store,
            folds: FoldingManager::new(),
            cursor: Position::default(),
            selection,
            config,
        };
        editor.refresh_folds();
        editor
    }

    /// The document text.
    pub fn text(&self) -> String {
        self.store.text()
    }

    /// The configuration in use.
    pub fn config(&self) -> &HeadlessConfig {
        &self.config
    }

    /// Select `selection`, clamped to the document.
    pub fn set_selection(&mut self, selection: LineRange) {
        let line_count = self.store.line_count();
        self.selection = LineRange::new(
            selection.start.min(line_count),
            selection.end.min(line_count),
        );
    }

    /// Current fold regions.
    pub fn fold_regions(&self) -> &[FoldRegion] {
        self.folds.regions()
    }

    /// The fold manager, for inspecting or changing open/closed state.
    pub fn folding_manager(&mut self) -> &mut FoldingManager {
        &mut self.folds
    }

    fn refresh_folds(&mut self) {
        let lines = self.store.all_lines();
        self.folds
            .replace_regions(parse_marker_folds(&lines, &self.config.fold_markers));
        self.folds.apply_fold_level(self.config.fold_level);
        debug!(folds = self.folds.regions().len(), "folds refreshed");
    }

    fn last_line(&self) -> usize {
        self.store.line_count().saturating_sub(1)
    }

    fn move_to_line(&mut self, line: usize) {
        self.cursor = Position::new(line.min(self.last_line()), 0);
    }

    fn next_fold_start(&self) -> Option<usize> {
        let line = self.cursor.line;
        self.folds
            .regions()
            .iter()
            .map(|r| r.start_line)
            .filter(|start| *start > line && !self.folds.is_hidden(*start))
            .min()
    }

    fn current_fold_start(&self) -> Option<usize> {
        let line = self.cursor.line;
        self.folds
            .containing(line)
            .filter(|r| r.start_line < line)
            .last()
            .map(|r| r.start_line)
    }

    fn current_fold_end(&self) -> Option<usize> {
        let line = self.cursor.line;
        self.folds
            .containing(line)
            .filter(|r| r.end_line > line)
            .last()
            .map(|r| r.end_line)
    }
}

impl TextBuffer for HeadlessEditor {
    fn line_count(&self) -> usize {
        self.store.line_count()
    }

    fn line(&self, index: usize) -> Option<String> {
        self.store.line(index)
    }

    fn lines(&self, start: usize, end: usize) -> Result<Vec<String>> {
        self.store.lines(start, end)
    }

    fn replace_lines(&mut self, start: usize, end: usize, lines: Vec<String>) -> Result<()> {
        self.store.replace_lines(start, end, &lines)?;
        self.refresh_folds();
        if self.cursor.line > self.last_line() {
            self.move_to_line(self.last_line());
        }
        Ok(())
    }
}

impl FoldNavigator for HeadlessEditor {
    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, position: Position) {
        self.cursor = Position::new(position.line.min(self.last_line()), position.column);
    }

    fn run_motion(&mut self, motion: Motion) -> usize {
        let line = self.cursor.line;
        match motion {
            Motion::GotoLine(target) => self.move_to_line(target),
            Motion::NextFoldStart => {
                if let Some(start) = self.next_fold_start() {
                    self.move_to_line(start);
                }
            }
            Motion::CurrentFoldStart => {
                if let Some(start) = self.current_fold_start() {
                    self.move_to_line(start);
                }
            }
            Motion::CurrentFoldEnd => {
                if let Some(end) = self.current_fold_end() {
                    self.move_to_line(end);
                }
            }
            Motion::OpenFold => {
                self.folds.expand_line(line);
            }
            Motion::OpenFolds(levels) => {
                self.folds.expand_levels(line, levels);
            }
            Motion::CloseFoldsRecursively => {
                self.folds.collapse_line_recursive(line);
            }
            Motion::ReapplyFoldLevel => self.folds.apply_fold_level(self.config.fold_level),
        }
        trace!(%motion, from = line, to = self.cursor.line, "headless motion");
        self.cursor.line
    }

    fn fold_level(&self, line: usize) -> usize {
        self.folds.level_at(line)
    }

    fn selection(&self) -> LineRange {
        self.selection
    }
}
