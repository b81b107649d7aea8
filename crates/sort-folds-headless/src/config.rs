//! Headless host configuration.

/// The pair of text markers delimiting a fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldMarkers {
    /// Marker opening a fold, e.g. `{{{`.
    pub open: String,
    /// Marker closing a fold, e.g. `}}}`.
    pub close: String,
}

impl FoldMarkers {
    /// Create a marker pair.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for FoldMarkers {
    fn default() -> Self {
        Self::new("{{{", "}}}")
    }
}

/// Settings of a [`crate::HeadlessEditor`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessConfig {
    /// Markers folds are derived from.
    pub fold_markers: FoldMarkers,
    /// Folds nested deeper than this level start closed; `0` closes every fold.
    pub fold_level: usize,
}
