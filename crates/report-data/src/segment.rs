//! Daily segment splitting.
//!
//! A monthly table labels only the first row of each day's block; the
//! rows beneath it inherit that day until a different label appears.
//! The splitter walks the grid once, carrying the current day across
//! blank labels, and resolves which rows belong to each day.

use std::collections::BTreeMap;

use report_core::cell::CellValue;
use report_core::grid::RawGrid;

// ── ScanState ─────────────────────────────────────────────────────────────────

/// Scanner state while walking rows for one target day.
///
/// Transition table (one pass, top to bottom):
///
/// | state    | date label   | next     | row kept |
/// |----------|--------------|----------|----------|
/// | Scanning | blank        | Scanning | no       |
/// | Scanning | target       | Active   | yes      |
/// | Scanning | other        | Scanning | no       |
/// | Active   | blank        | Active   | yes      |
/// | Active   | target       | Active   | yes      |
/// | Active   | other        | Closed   | no       |
/// | Closed   | any          | Closed   | no       |
///
/// `Closed` is absorbing: a day's block is assumed to be written once,
/// contiguously, so a target day reappearing after its block ended is
/// treated as disconnected and its later rows are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Active,
    Closed,
}

// ── DaySplitter ───────────────────────────────────────────────────────────────

/// Splits grid rows into per-day segments using carry-forward labels.
#[derive(Debug, Clone)]
pub struct DaySplitter {
    date_col: usize,
}

impl DaySplitter {
    pub fn new(date_col: usize) -> Self {
        Self { date_col }
    }

    /// Row indices of the target day's contiguous segment.
    ///
    /// `end` bounds the scan (exclusive), typically the section
    /// boundary. `target_day` is the zero-padded two-digit token. A
    /// day that never appears yields an empty segment, not an error.
    pub fn segment_rows(&self, grid: &RawGrid, target_day: &str, end: usize) -> Vec<usize> {
        let mut state = ScanState::Scanning;
        let mut rows = Vec::new();

        for row in 0..end.min(grid.row_count()) {
            state = match (state, self.day_label(grid, row)) {
                (ScanState::Closed, _) => ScanState::Closed,
                (current, None) => current,
                (_, Some(label)) if label == target_day => ScanState::Active,
                (ScanState::Active, Some(_)) => ScanState::Closed,
                (current, Some(_)) => current,
            };

            if state == ScanState::Active {
                rows.push(row);
            }
        }

        rows
    }

    /// Full day-to-rows mapping with the same first-run-only semantics.
    ///
    /// Each day maps to its first contiguous block; rows of a day that
    /// reappears later are dropped, keeping all segments disjoint.
    pub fn split_by_day(&self, grid: &RawGrid, end: usize) -> BTreeMap<String, Vec<usize>> {
        let mut map: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut active: Option<String> = None;

        for row in 0..end.min(grid.row_count()) {
            if let Some(label) = self.day_label(grid, row) {
                if active.as_deref() == Some(label.as_str()) {
                    // Consecutive labelled rows of the same day.
                } else if map.contains_key(&label) {
                    // Disconnected reappearance; its rows are dropped.
                    active = None;
                } else {
                    active = Some(label);
                }
            }

            if let Some(day) = &active {
                map.entry(day.clone()).or_default().push(row);
            }
        }

        map
    }

    /// Normalised day label of a row, `None` for blank cells.
    ///
    /// Sheet authors write both `5` and `05`; single-digit labels are
    /// zero-padded so the padded-token equality test covers both.
    fn day_label(&self, grid: &RawGrid, row: usize) -> Option<String> {
        match grid.value(row, self.date_col) {
            CellValue::Empty => None,
            value => {
                let text = value.as_text();
                if text.len() == 1 && text.chars().all(|c| c.is_ascii_digit()) {
                    Some(format!("0{}", text))
                } else {
                    Some(text)
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
