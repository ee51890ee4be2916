//! Express courier table accumulation.

use report_core::grid::RawGrid;
use report_core::models::{ExpressTotals, RowCategory};
use report_core::schema::{ExpressColumns, SUMMARY_MARKER};

/// Detect sheet-authored running-total lines.
///
/// The marker may sit in any column, so the whole row is scanned; a hit
/// discards the row before any field is read.
pub fn classify_summary_row(grid: &RawGrid, row: usize) -> Option<RowCategory> {
    let cells = grid.row(row)?;
    for col in 0..cells.len() {
        if grid.text(row, col).to_lowercase().contains(SUMMARY_MARKER) {
            return Some(RowCategory::SummaryRow);
        }
    }
    None
}

/// Totals for the given rows of one day's segment.
///
/// A row counts as one shipment only when at least one of its four
/// payment fields is non-empty; each non-empty field is coerced and
/// summed with the zero fallback.
pub fn tabulate_express(grid: &RawGrid, rows: &[usize], columns: &ExpressColumns) -> ExpressTotals {
    let mut totals = ExpressTotals::default();

    for &row in rows {
        if classify_summary_row(grid, row).is_some() {
            continue;
        }

        let cash = grid.value(row, columns.cash);
        let bank = grid.value(row, columns.bank);
        let bank_alt = grid.value(row, columns.bank_alt);
        let packing = grid.value(row, columns.packing);

        if cash.is_empty() && bank.is_empty() && bank_alt.is_empty() && packing.is_empty() {
            continue;
        }

        totals.count += 1;
        totals.cash += cash.number_or(0.0);
        totals.bank += bank.number_or(0.0);
        totals.bank_alt += bank_alt.number_or(0.0);
        totals.packing += packing.number_or(0.0);
    }

    totals
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    /// Row in the default express layout:
    /// date, awb, destination, cash, bank, alt bank, packing.
    fn row(date: &str, awb: &str, cash: &str, bank: &str, alt: &str, packing: &str) -> Vec<Value> {
        vec![
            json!(date),
            json!(awb),
            json!("Palangkaraya"),
            json!(cash),
            json!(bank),
            json!(alt),
            json!(packing),
        ]
    }

    fn tabulate(rows: Vec<Vec<Value>>) -> ExpressTotals {
        let grid = RawGrid::new(rows);
        let all: Vec<usize> = (0..grid.row_count()).collect();
        tabulate_express(&grid, &all, &ExpressColumns::default())
    }

    #[test]
    fn test_counts_rows_with_any_payment() {
        let totals = tabulate(vec![
            row("05", "EXP-1", "5000", "", "", ""),
            row("", "EXP-2", "", "7000", "", "1000"),
        ]);

        assert_eq!(totals.count, 2);
        assert_eq!(totals.cash, 5000.0);
        assert_eq!(totals.bank, 7000.0);
        assert_eq!(totals.bank_alt, 0.0);
        assert_eq!(totals.packing, 1000.0);
    }

    #[test]
    fn test_row_without_payment_is_not_counted() {
        let totals = tabulate(vec![row("05", "EXP-1", "", "", "", "")]);
        assert_eq!(totals, ExpressTotals::default());
    }

    #[test]
    fn test_summary_row_in_any_column_is_discarded() {
        let totals = tabulate(vec![
            row("05", "EXP-1", "5000", "", "", ""),
            // A running-total line with real numbers in the payment
            // columns must not leak into the sums.
            row("", "TOTAL", "99000", "99000", "99000", "99000"),
            row("", "EXP-2", "", "", "Total hari ini", ""),
        ]);

        assert_eq!(totals.count, 1);
        assert_eq!(totals.cash, 5000.0);
        assert_eq!(totals.bank, 0.0);
        assert_eq!(totals.bank_alt, 0.0);
        assert_eq!(totals.packing, 0.0);
    }

    #[test]
    fn test_classify_summary_row() {
        let grid = RawGrid::new(vec![
            vec![json!("05"), json!("EXP-1")],
            vec![json!(""), json!("Total")],
        ]);
        assert_eq!(classify_summary_row(&grid, 0), None);
        assert_eq!(classify_summary_row(&grid, 1), Some(RowCategory::SummaryRow));
        assert_eq!(classify_summary_row(&grid, 9), None);
    }

    #[test]
    fn test_non_numeric_payment_counts_but_adds_zero() {
        let totals = tabulate(vec![row("05", "EXP-1", "lunas", "", "", "")]);

        assert_eq!(totals.count, 1);
        assert_eq!(totals.cash, 0.0);
    }

    #[test]
    fn test_empty_rows_produce_zero_totals() {
        let totals = tabulate(vec![
            row("05", "EXP-1", "", "", "", ""),
            row("", "", "", "", "", ""),
        ]);
        assert_eq!(totals, ExpressTotals::default());
    }
}
