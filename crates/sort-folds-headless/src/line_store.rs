//! Line storage
//!
//! Lines are kept in a [`Rope`], giving O(log N) line access and range replacement. Text is
//! stored with LF newlines; a CRLF document is normalized on load and converted back by
//! [`LineStore::text`].

use ropey::Rope;
use sort_folds::Result;
use sort_folds::host::check_range;

/// The newline sequence used when writing a document back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the line ending of a source text.
    ///
    /// Any CRLF makes the document [`LineEnding::Crlf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Convert an LF-normalized text to this line ending.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

/// Rope-backed, line-addressable document text.
///
/// A final newline terminates the last line instead of opening an empty one, so `"a\nb\n"` has
/// two lines. An empty document has a single empty line.
#[derive(Debug, Clone)]
pub struct LineStore {
    rope: Rope,
    line_ending: LineEnding,
    trailing_newline: bool,
}

impl LineStore {
    /// Build the store from document text.
    pub fn from_text(text: &str) -> Self {
        let line_ending = LineEnding::detect_in_text(text);
        let normalized = text.replace("\r\n", "\n");
        let (body, trailing_newline) = match normalized.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (normalized.as_str(), false),
        };

        Self {
            rope: Rope::from_str(body),
            line_ending,
            trailing_newline,
        }
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of line `index` without its newline.
    pub fn line(&self, index: usize) -> Option<String> {
        if index >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(index).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// Lines `start..end`.
    pub fn lines(&self, start: usize, end: usize) -> Result<Vec<String>> {
        check_range(start, end, self.line_count())?;
        Ok((start..end).filter_map(|index| self.line(index)).collect())
    }

    /// Every line of the document.
    pub fn all_lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|index| self.line(index))
            .collect()
    }

    /// Replace lines `start..end` with `lines`.
    ///
    /// Replacement lines must not contain `'\n'`.
    pub fn replace_lines(&mut self, start: usize, end: usize, lines: &[String]) -> Result<()> {
        let line_count = self.line_count();
        check_range(start, end, line_count)?;
        debug_assert!(lines.iter().all(|line| !line.contains('\n')));

        let joined = lines.join("\n");
        if end < line_count {
            let from = self.rope.line_to_char(start);
            let to = self.rope.line_to_char(end);
            self.rope.remove(from..to);
            if !lines.is_empty() {
                self.rope.insert(from, &format!("{joined}\n"));
            }
        } else if start < line_count {
            // The replaced lines run to the end of the document.
            let from = self.rope.line_to_char(start);
            let len = self.rope.len_chars();
            if lines.is_empty() {
                // Drop the newline that terminated the line before `start` as well.
                self.rope.remove(from.saturating_sub(1)..len);
            } else {
                self.rope.remove(from..len);
                self.rope.insert(from, &joined);
            }
        } else if !lines.is_empty() {
            let len = self.rope.len_chars();
            self.rope.insert(len, &format!("\n{joined}"));
        }
        Ok(())
    }

    /// The document text, with its original line ending and final newline.
    pub fn text(&self) -> String {
        let mut text = self.rope.to_string();
        if self.trailing_newline {
            text.push('\n');
        }
        self.line_ending.apply_to_text(&text)
    }

    /// Line ending detected on load.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}
