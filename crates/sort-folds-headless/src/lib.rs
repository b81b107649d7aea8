#![warn(missing_docs)]
//! Headless editor host for `sort-folds`
//!
//! # Overview
//!
//! `sort-folds-headless` is a small in-memory editor implementing the host traits of
//! [`sort_folds`]. It keeps the document in a rope, derives folds from text markers (`{{{` and
//! `}}}` by default, with optional level suffixes such as `{{{2`), and answers the fold motions
//! a modal editor provides (`zj`, `[z`, `]z`, `zo`, `zC`, `zX`, ...).
//!
//! It serves as the reference host for tests and for the command line front end.
//!
//! # Quick Start
//!
//! ```rust
//! use sort_folds::{LineRange, sort_folds};
//! use sort_folds_headless::HeadlessEditor;
//!
//! let mut editor = HeadlessEditor::new("{{{ pear\n}}}\n{{{ apple\n}}}\n");
//! editor.set_selection(LineRange::new(0, 4));
//!
//! sort_folds(&mut editor, 0).unwrap();
//!
//! assert_eq!(editor.text(), "{{{ apple\n}}}\n{{{ pear\n}}}\n");
//! ```
//!
//! # Module Description
//!
//! - [`line_store`] - Rope-backed line storage
//! - [`folding`] - Fold regions and their open/closed state
//! - [`marker`] - Fold regions derived from text markers
//! - [`config`] - Markers and initial fold level
//! - [`editor`] - The editor tying it together, with the motion engine

pub mod config;
pub mod editor;
pub mod folding;
pub mod line_store;
pub mod marker;

pub use config::{FoldMarkers, HeadlessConfig};
pub use editor::HeadlessEditor;
pub use folding::{FoldRegion, FoldingManager};
pub use line_store::{LineEnding, LineStore};
pub use marker::parse_marker_folds;
