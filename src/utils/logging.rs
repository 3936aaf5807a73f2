//! Log lines for reference table loading
//!
//! Each table load logs one start line and one summary line; dropped rows
//! are reported as warnings so they show at the default `info` level.

use std::path::Path;
use std::time::Duration;

use crate::models::types::Indicator;
use crate::reference::LoadStats;

/// Announce that `indicator`'s table is about to be read from `path`
pub fn log_table_load_start(indicator: Indicator, path: &Path) {
    log::info!("Loading {} ({}) reference from {}", indicator, indicator.code(), path.display());
}

/// Summarise a finished table load, warning about any rows that were dropped
pub fn log_table_loaded(indicator: Indicator, path: &Path, stats: &LoadStats, elapsed: Duration) {
    log::info!(
        "{}: indexed {} rows from {} in {:?}",
        indicator.code(),
        stats.kept,
        path.display(),
        elapsed
    );

    if stats.skipped > 0 {
        log::warn!(
            "{}: skipped {} rows with missing or invalid values in {}",
            indicator.code(),
            stats.skipped,
            path.display()
        );
    }
    if stats.duplicates > 0 {
        log::warn!(
            "{}: ignored {} rows with duplicate keys in {} (first row kept)",
            indicator.code(),
            stats.duplicates,
            path.display()
        );
    }
}

/// Warn that a table loaded without a single usable row
pub fn log_empty_table(indicator: Indicator, path: &Path) {
    log::warn!(
        "{} reference table is empty; every {} lookup will have no result: {}",
        indicator,
        indicator.code(),
        path.display()
    );
}
