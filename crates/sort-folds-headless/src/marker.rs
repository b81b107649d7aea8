//! Marker folds
//!
//! Derives fold regions from text markers. An open marker starts a fold and a close marker ends
//! the innermost open one. A marker may carry a level suffix: `{{{2` starts a level-2 fold
//! (ending any open fold at level 2 or deeper on the line above), and `}}}2` ends the level-2
//! fold together with everything nested in it. Folds still open at the end of the document end
//! on its last line.

use crate::config::FoldMarkers;
use crate::folding::FoldRegion;

/// Fold regions described by `markers` in `lines`, sorted outermost first.
pub fn parse_marker_folds<S: AsRef<str>>(lines: &[S], markers: &FoldMarkers) -> Vec<FoldRegion> {
    let mut regions = Vec::new();
    if markers.open.is_empty() || markers.close.is_empty() {
        return regions;
    }

    // Start lines of the currently open folds; the depth is the fold level.
    let mut open: Vec<usize> = Vec::new();

    for (line_number, line) in lines.iter().enumerate() {
        for marker in scan_line(line.as_ref(), markers) {
            match marker {
                Marker::Open(None) => open.push(line_number),
                Marker::Open(Some(level)) => {
                    while open.len() >= level {
                        close_fold(&mut open, &mut regions, line_number.checked_sub(1), true);
                    }
                    while open.len() < level {
                        open.push(line_number);
                    }
                }
                Marker::Close(None) => {
                    close_fold(&mut open, &mut regions, Some(line_number), false);
                }
                Marker::Close(Some(level)) => {
                    while open.len() >= level {
                        close_fold(&mut open, &mut regions, Some(line_number), false);
                    }
                }
            }
        }
    }

    let last_line = lines.len().checked_sub(1);
    while !open.is_empty() {
        close_fold(&mut open, &mut regions, last_line, true);
    }

    regions.sort_by(|a, b| {
        a.start_line
            .cmp(&b.start_line)
            .then_with(|| b.end_line.cmp(&a.end_line))
    });
    regions
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Open(Option<usize>),
    Close(Option<usize>),
}

/// Pop the innermost open fold and record it as ending on `end_line`.
///
/// A fold closed by a marker on its own start line encloses nothing and is dropped; folds ended
/// implicitly (by a level marker or the end of the document) may cover a single line.
fn close_fold(
    open: &mut Vec<usize>,
    regions: &mut Vec<FoldRegion>,
    end_line: Option<usize>,
    single_line: bool,
) {
    let Some(start_line) = open.pop() else {
        return;
    };
    let long_enough = |end: &usize| *end > start_line || (single_line && *end == start_line);
    if let Some(end_line) = end_line.filter(long_enough) {
        regions.push(FoldRegion::new(start_line, end_line));
    }
}

/// Markers on one line, in order of appearance.
fn scan_line(line: &str, markers: &FoldMarkers) -> Vec<Marker> {
    let mut found = Vec::new();
    let mut pos = 0;

    loop {
        let rest = &line[pos..];
        let open_at = rest.find(markers.open.as_str());
        let close_at = rest.find(markers.close.as_str());
        let (at, is_open) = match (open_at, close_at) {
            (Some(o), Some(c)) if c < o => (c, false),
            (Some(o), _) => (o, true),
            (None, Some(c)) => (c, false),
            (None, None) => break,
        };

        let marker_len = if is_open {
            markers.open.len()
        } else {
            markers.close.len()
        };
        let after = pos + at + marker_len;
        let digits_len = line[after..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let level = line[after..after + digits_len]
            .parse::<usize>()
            .ok()
            .filter(|level| *level > 0);

        found.push(if is_open {
            Marker::Open(level)
        } else {
            Marker::Close(level)
        });
        pos = after + digits_len;
    }

    found
}
