//! Pengeluaran (expense) table accumulation.
//!
//! Unlike the parcel tables, every expense row carries its own day
//! label, so matching is a direct equality test against the padded and
//! unpadded day tokens with no carry-forward segmentation.

use report_core::cell::CellValue;
use report_core::dates;
use report_core::grid::RawGrid;
use report_core::models::{ExpenseTotals, RowCategory};
use report_core::schema::ExpenseColumns;

/// Classify one expense row that matched the target day.
///
/// Rows without a description are ignored: `None`.
pub fn classify_expense_row(description: &str, amount: &CellValue) -> Option<RowCategory> {
    if description.is_empty() {
        return None;
    }
    if amount.is_empty() {
        Some(RowCategory::UnpricedExpense)
    } else {
        Some(RowCategory::PricedExpense)
    }
}

/// Fold every row matching `target_day` into expense totals.
///
/// `end` bounds the scan (exclusive), from the section locator.
/// Unpriced lines contribute their description to the exceptions list
/// and nothing to the total.
pub fn tabulate_expenses(
    grid: &RawGrid,
    columns: &ExpenseColumns,
    target_day: &str,
    end: usize,
) -> ExpenseTotals {
    let short_day = dates::unpadded(target_day);
    let mut totals = ExpenseTotals::default();

    for row in 0..end.min(grid.row_count()) {
        let label = grid.value(row, columns.date).as_text();
        if label != target_day && label != short_day {
            continue;
        }

        let description = grid.text(row, columns.description);
        let amount = grid.value(row, columns.amount);
        match classify_expense_row(&description, &amount) {
            Some(RowCategory::PricedExpense) => totals.total += amount.number_or(0.0),
            Some(RowCategory::UnpricedExpense) => totals.items_without_price.push(description),
            _ => {}
        }
    }

    totals
}

// ── Tests ─────────────────────────────────────────────────────────────────────
