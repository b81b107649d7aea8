//! Fold regions and their open/closed state.

/// Fold region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRegion {
    /// Start line number
    pub start_line: usize,
    /// End line number (inclusive)
    pub end_line: usize,
    /// Whether folded
    pub is_collapsed: bool,
}

impl FoldRegion {
    /// Create an open folding region for an inclusive line range.
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
            is_collapsed: false,
        }
    }

    /// Expand
    pub fn expand(&mut self) {
        self.is_collapsed = false;
    }

    /// Collapse
    pub fn collapse(&mut self) {
        self.is_collapsed = true;
    }

    /// Check if line number is within fold region
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// Check if `other` lies entirely within this region.
    pub fn encloses(&self, other: &FoldRegion) -> bool {
        self.start_line <= other.start_line && other.end_line <= self.end_line
    }
}

/// Folding manager
///
/// Regions are kept sorted by start line, outer regions before the regions nested in them, so
/// iterating the regions containing a line goes from the outermost to the innermost.
#[derive(Debug, Clone, Default)]
pub struct FoldingManager {
    regions: Vec<FoldRegion>,
}

impl FoldingManager {
    /// Create an empty folding manager.
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize_regions(regions: &mut Vec<FoldRegion>) {
        regions.retain(|r| r.end_line >= r.start_line);
        regions.sort_by(|a, b| {
            a.start_line
                .cmp(&b.start_line)
                .then_with(|| b.end_line.cmp(&a.end_line))
        });
        regions.dedup_by(|a, b| a.start_line == b.start_line && a.end_line == b.end_line);
    }

    /// Replace fold regions (will be sorted and deduplicated).
    pub fn replace_regions(&mut self, mut regions: Vec<FoldRegion>) {
        Self::normalize_regions(&mut regions);
        self.regions = regions;
    }

    /// Get all fold regions.
    pub fn regions(&self) -> &[FoldRegion] {
        &self.regions
    }

    /// Fold regions containing `line`, outermost first.
    pub fn containing(&self, line: usize) -> impl Iterator<Item = &FoldRegion> + '_ {
        self.regions.iter().filter(move |r| r.contains_line(line))
    }

    /// Number of fold regions containing `line`.
    pub fn level_at(&self, line: usize) -> usize {
        self.containing(line).count()
    }

    /// Nesting depth of `region` (1 for a top-level fold).
    pub fn region_level(&self, region: &FoldRegion) -> usize {
        self.regions.iter().filter(|r| r.encloses(region)).count()
    }

    /// Whether `line` is hidden inside a closed fold (any line of it but the first).
    pub fn is_hidden(&self, line: usize) -> bool {
        self.regions
            .iter()
            .any(|r| r.is_collapsed && r.start_line < line && line <= r.end_line)
    }

    /// Open the outermost closed fold containing `line`.
    pub fn expand_line(&mut self, line: usize) -> bool {
        match self
            .regions
            .iter_mut()
            .find(|r| r.is_collapsed && r.contains_line(line))
        {
            Some(region) => {
                region.expand();
                true
            }
            None => false,
        }
    }

    /// Open up to `levels` closed folds containing `line`, outermost first.
    pub fn expand_levels(&mut self, line: usize, levels: usize) -> usize {
        let mut opened = 0;
        while opened < levels && self.expand_line(line) {
            opened += 1;
        }
        opened
    }

    /// Close every fold containing `line`.
    pub fn collapse_line_recursive(&mut self, line: usize) -> bool {
        let mut closed = false;
        for region in self.regions.iter_mut().filter(|r| r.contains_line(line)) {
            region.collapse();
            closed = true;
        }
        closed
    }

    /// Close folds nested deeper than `level` and open the rest.
    pub fn apply_fold_level(&mut self, level: usize) {
        let depths: Vec<usize> = self
            .regions
            .iter()
            .map(|region| self.region_level(region))
            .collect();
        for (region, depth) in self.regions.iter_mut().zip(depths) {
            if depth > level {
                region.collapse();
            } else {
                region.expand();
            }
        }
    }
}
