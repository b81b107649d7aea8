//! Logging setup for the `sort-folds` binary.
//!
//! Logs go to stderr so stdout carries only the sorted document.
//!
//! ## Environment Variables
//!
//! 1. **`SORT_FOLDS_LOG`** (highest priority) - a bare level such as `debug` applies to the
//!    sort-folds crates only; anything with `=`, `:` or `,` is used as a full filter
//! 2. **`RUST_LOG`** - standard tracing filter, used as-is
//! 3. **Default** - `warn`

use std::env;
use tracing_subscriber::{EnvFilter, fmt};

const CRATES: [&str; 3] = ["sort_folds", "sort_folds_headless", "sort_folds_cli"];

/// Install the stderr subscriber.
///
/// Safe to call more than once; later calls report that a subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    fmt()
        .with_env_filter(create_filter())
        .with_writer(std::io::stderr)
        .try_init()
}

/// Initialize logging for tests, ignoring an already installed subscriber.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter())
        .with_test_writer()
        .try_init();
}

fn create_filter() -> EnvFilter {
    EnvFilter::new(filter_directives(
        env::var("SORT_FOLDS_LOG").ok().as_deref(),
        env::var("RUST_LOG").ok().as_deref(),
    ))
}

/// Filter directives for the given `SORT_FOLDS_LOG` and `RUST_LOG` values.
fn filter_directives(sort_folds_log: Option<&str>, rust_log: Option<&str>) -> String {
    if let Some(level) = sort_folds_log {
        return expand_level(level);
    }
    if let Some(rust_log) = rust_log {
        return rust_log.to_string();
    }
    "warn".to_string()
}

fn expand_level(level: &str) -> String {
    if level.contains('=') || level.contains(':') || level.contains(',') {
        return level.to_string();
    }

    let mut directives = String::from("warn");
    for krate in CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_priority() {
        assert_eq!(filter_directives(None, None), "warn");
        assert_eq!(filter_directives(None, Some("info")), "info");
        assert_eq!(
            filter_directives(Some("debug"), Some("info")),
            "warn,sort_folds=debug,sort_folds_headless=debug,sort_folds_cli=debug"
        );
    }

    #[test]
    fn test_full_filters_pass_through() {
        assert_eq!(
            filter_directives(Some("sort_folds=trace,warn"), None),
            "sort_folds=trace,warn"
        );
    }
}
