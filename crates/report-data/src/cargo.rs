//! Cargo (parcel) table classification and accumulation.

use std::sync::OnceLock;

use regex::Regex;
use report_core::grid::RawGrid;
use report_core::models::{CargoTotals, RowCategory};
use report_core::schema::{CargoColumns, MARKETPLACE_NAMES, SUMMARY_MARKER};

/// Receipt numbers printed by the cargo channel are at least ten
/// digits long.
fn digit_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{10,}").expect("static pattern"))
}

/// Classify a cargo receipt identifier.
///
/// Marketplace names win over the digit-run rule, so an online order
/// id that happens to contain a long number still counts as online.
/// Anything matching neither rule (short ids, handwritten notes) is
/// ignored: `None`.
pub fn classify_receipt(receipt: &str) -> Option<RowCategory> {
    let lowered = receipt.to_lowercase();
    if MARKETPLACE_NAMES.iter().any(|name| lowered.contains(name)) {
        return Some(RowCategory::OnlineParcel);
    }
    if digit_run_regex().is_match(receipt) {
        return Some(RowCategory::RegularParcel);
    }
    None
}

// ── CargoAccumulator ──────────────────────────────────────────────────────────

/// Folds the rows of one day's segment into [`CargoTotals`].
#[derive(Debug, Default)]
pub struct CargoAccumulator {
    columns: CargoColumns,
    totals: CargoTotals,
}

impl CargoAccumulator {
    pub fn new(columns: CargoColumns) -> Self {
        Self {
            columns,
            totals: CargoTotals::default(),
        }
    }

    /// Fold one row into the running totals.
    ///
    /// Rows with a blank receipt or the literal summary marker are
    /// skipped. Payment fields accumulate for every remaining row,
    /// whichever branch the receipt classification takes; an ignored
    /// receipt still paid.
    pub fn add_row(&mut self, grid: &RawGrid, row: usize) {
        let receipt = grid.text(row, self.columns.receipt);
        if receipt.is_empty() || receipt.eq_ignore_ascii_case(SUMMARY_MARKER) {
            return;
        }

        self.totals.cash += grid.number_or(row, self.columns.cash, 0.0);
        self.totals.bank_bca += grid.number_or(row, self.columns.bank_bca, 0.0);
        self.totals.bank_bri += grid.number_or(row, self.columns.bank_bri, 0.0);
        self.totals.cod += grid.number_or(row, self.columns.cod, 0.0);
        self.totals.packing += grid.number_or(row, self.columns.packing, 0.0);

        let weight = grid.number_or(row, self.columns.weight, 0.0);
        match classify_receipt(&receipt) {
            Some(RowCategory::OnlineParcel) => {
                self.totals.online_ids.push(receipt);
                self.totals.weight_online += weight;
            }
            Some(RowCategory::RegularParcel) => {
                self.totals.count_regular += 1;
                self.totals.weight_regular += weight;
            }
            _ => {}
        }
    }

    pub fn finish(self) -> CargoTotals {
        self.totals
    }
}

/// Totals for the given rows of one day's segment.
pub fn tabulate_cargo(grid: &RawGrid, rows: &[usize], columns: &CargoColumns) -> CargoTotals {
    let mut acc = CargoAccumulator::new(columns.clone());
    for &row in rows {
        acc.add_row(grid, row);
    }
    acc.finish()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
