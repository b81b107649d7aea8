//! Sort the marker folds of a text file.
//!
//! # Usage
//!
//! ```bash
//! # Sort every top-level fold of notes.txt by its first line, print the result.
//! sort-folds notes.txt
//!
//! # Sort the folds between lines 10 and 80 by their second line, in place.
//! sort-folds --first 10 --last 80 --key 1 --in-place notes.txt
//! ```
//!
//! Folds are delimited by `{{{` / `}}}` unless `--open-marker` / `--close-marker` say
//! otherwise. Logging goes to stderr, filtered by `SORT_FOLDS_LOG` or `RUST_LOG`.

pub mod logging;

use clap::Parser;
use sort_folds::{LineRange, SortFoldsError, SortOutcome, TextBuffer, sort_folds};
use sort_folds_headless::{FoldMarkers, HeadlessConfig, HeadlessEditor};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Command line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sort-folds",
    version,
    about = "Sort the marker folds of a file by one line of each fold"
)]
pub struct Cli {
    /// File whose folds are sorted.
    pub file: PathBuf,

    /// First line of the range to sort (1-based, inclusive). Defaults to the first line.
    #[arg(short, long, env = "SORT_FOLDS_FIRST")]
    pub first: Option<usize>,

    /// Last line of the range to sort (1-based, inclusive). Defaults to the last line.
    #[arg(short, long, env = "SORT_FOLDS_LAST")]
    pub last: Option<usize>,

    /// Line of each fold compared when sorting (0 is the fold's first line).
    #[arg(short, long, default_value_t = 0, env = "SORT_FOLDS_KEY")]
    pub key: usize,

    /// Marker opening a fold.
    #[arg(long, default_value = "{{{", env = "SORT_FOLDS_OPEN_MARKER")]
    pub open_marker: String,

    /// Marker closing a fold.
    #[arg(long, default_value = "}}}", env = "SORT_FOLDS_CLOSE_MARKER")]
    pub close_marker: String,

    /// Folds nested deeper than this start closed.
    #[arg(long, default_value_t = 0, env = "SORT_FOLDS_FOLD_LEVEL")]
    pub fold_level: usize,

    /// Rewrite the file instead of printing the result.
    #[arg(short, long)]
    pub in_place: bool,
}

impl Cli {
    fn config(&self) -> HeadlessConfig {
        HeadlessConfig {
            fold_markers: FoldMarkers::new(self.open_marker.clone(), self.close_marker.clone()),
            fold_level: self.fold_level,
        }
    }

    /// The zero-based, end-exclusive selection for a document of `line_count` lines.
    fn selection(&self, line_count: usize) -> Result<LineRange, CliError> {
        let first = self.first.unwrap_or(1);
        let last = self.last.unwrap_or(line_count);
        if first == 0 || last < first {
            return Err(CliError::InvalidLineRange { first, last });
        }
        Ok(LineRange::new(first - 1, last.min(line_count)))
    }
}

/// Errors reported by the command line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// The sorted text could not be written back.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File that was written.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// `--first` / `--last` do not describe a range.
    #[error("invalid line range {first}..={last} (lines are 1-based)")]
    InvalidLineRange {
        /// Requested first line.
        first: usize,
        /// Requested last line.
        last: usize,
    },

    /// Sorting failed.
    #[error(transparent)]
    Sort(#[from] SortFoldsError),
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct Report {
    /// The document after sorting.
    pub output: String,
    /// What sorting did.
    pub outcome: SortOutcome,
}

/// Sort the folds of `cli.file` as requested.
///
/// With `--in-place` the file is rewritten when any fold moved; the sorted text is returned
/// either way.
pub fn run(cli: &Cli) -> Result<Report, CliError> {
    let text = fs::read_to_string(&cli.file).map_err(|source| CliError::Read {
        path: cli.file.clone(),
        source,
    })?;

    let mut editor = HeadlessEditor::with_config(&text, cli.config());
    let selection = cli.selection(editor.line_count())?;
    editor.set_selection(selection);

    let outcome = sort_folds(&mut editor, cli.key)?;
    info!(
        file = %cli.file.display(),
        folds = outcome.spans.len(),
        rewritten = outcome.rewritten,
        "sorted folds"
    );

    let output = editor.text();
    if cli.in_place && outcome.rewritten > 0 {
        fs::write(&cli.file, &output).map_err(|source| CliError::Write {
            path: cli.file.clone(),
            source,
        })?;
    }

    Ok(Report { output, outcome })
}
