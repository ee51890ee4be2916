//! Section boundary location within a fetched grid.

use report_core::grid::RawGrid;
use report_core::schema::SECTION_FALLBACK_ROWS;
use tracing::debug;

/// Exclusive end of the usable row window before a section marker.
///
/// Scans `label_col` from `start_row` forward and returns the index of
/// the first row whose label contains `marker` case-insensitively, so
/// every row before it stays usable. When the marker never appears,
/// returns the fixed fallback bound: downstream code only loses
/// trailing rows it would otherwise not have read.
pub fn find_section_end(grid: &RawGrid, label_col: usize, marker: &str, start_row: usize) -> usize {
    let needle = marker.to_lowercase();
    for row in start_row..grid.row_count() {
        if grid.text(row, label_col).to_lowercase().contains(&needle) {
            debug!("section marker \"{}\" found at row {}", marker, row);
            return row;
        }
    }
    SECTION_FALLBACK_ROWS
}

// ── Tests ─────────────────────────────────────────────────────────────────────
