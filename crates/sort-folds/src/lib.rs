#![warn(missing_docs)]
//! Sort Folds - reorder sibling folds by the content of one of their lines
//!
//! # Overview
//!
//! `sort-folds` takes the closed folds intersecting a selected line range and rewrites the
//! buffer so that the folds appear ordered by a chosen line of each fold (the *key line*),
//! compared case-insensitively. Lines outside the folds do not move.
//!
//! The crate is headless: it talks to an editor through two small traits, [`TextBuffer`] for
//! line access and [`FoldNavigator`] for the cursor, motions and fold levels. Many editors only
//! expose folds through cursor motions, so fold boundaries are recovered by walking the cursor
//! rather than by querying a fold tree.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command (sort_folds + result presentation) │  ← Public API
//! ├──────────────────────┬──────────────────────┤
//! │  Fold Discovery      │  Fold Reordering     │  ← Core logic
//! ├──────────────────────┼──────────────────────┤
//! │  Cursor/Motion       │  Buffer Snapshot     │
//! ├──────────────────────┴──────────────────────┤
//! │  Host traits (TextBuffer + FoldNavigator)   │  ← Implemented by the editor
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Conventions
//!
//! - Lines are zero-based indices everywhere.
//! - [`FoldSpan`] and [`LineRange`] are half-open: `start` inclusive, `end` exclusive.
//!
//! # Quick Start
//!
//! ```rust
//! use sort_folds::{FoldSpan, reorder};
//!
//! let mut buffer: Vec<String> = ["A", "{{{ banana", "}}}", "{{{ apple", "}}}", "C"]
//!     .iter()
//!     .map(|line| line.to_string())
//!     .collect();
//!
//! let spans = [FoldSpan::new(1, 3).unwrap(), FoldSpan::new(3, 5).unwrap()];
//! reorder(&spans, 0, &mut buffer).unwrap();
//!
//! assert_eq!(buffer, ["A", "{{{ apple", "}}}", "{{{ banana", "}}}", "C"]);
//! ```
//!
//! # Module Description
//!
//! - [`host`] - Traits implemented by the hosting editor
//! - [`cursor`] - Motions and the cursor-restoring scope guard
//! - [`discovery`] - Walks the cursor to find sibling fold spans
//! - [`snapshot`] - Immutable copy of the buffer used as the read source
//! - [`reorder`] - Stable, case-insensitive reordering of fold blocks
//! - [`command`] - The `sort_folds` entry point

pub mod command;
pub mod cursor;
pub mod discovery;
pub mod error;
pub mod host;
pub mod reorder;
pub mod snapshot;
pub mod span;

pub use command::{SortFoldsOptions, SortOutcome, present_result, sort_folds, sort_folds_with};
pub use cursor::{Motion, ScopedCursor, apply_motion, apply_motions, fold_level};
pub use discovery::discover;
pub use error::{Result, SortFoldsError};
pub use host::{FoldHost, FoldNavigator, Position, TextBuffer};
pub use reorder::{reorder, sort_order};
pub use snapshot::BufferSnapshot;
pub use span::{FoldSpan, LineRange};
