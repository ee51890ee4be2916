//! Day and range report orchestration.
//!
//! Coordinates the four per-table pipelines (cargo, express, expense,
//! attendance) for one calendar day and folds days into a range
//! report. Each table fetch is an independent unit of work: a
//! transport failure zeroes that table only, and a failed day inside a
//! range is logged and omitted instead of aborting the batch.

use chrono::NaiveDate;
use report_core::dates;
use report_core::error::{ReportError, Result};
use report_core::models::{
    AttendanceRecord, CargoTotals, DailyReport, DateRange, ExpenseTotals, ExpressTotals,
    RangeReport,
};
use report_core::schema::{
    AttendanceColumns, CargoColumns, ExpenseColumns, ExpressColumns, SUMMARY_MARKER,
};
use report_data::aggregator::RangeAggregator;
use report_data::locate::find_section_end;
use report_data::segment::DaySplitter;
use report_data::source::TableSource;
use report_data::{attendance, cargo, expense, express};
use tracing::{debug, warn};

// ── Layout ────────────────────────────────────────────────────────────────────

/// Column layouts used for every fetch; defaults carry the production
/// workbook.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub cargo: CargoColumns,
    pub express: ExpressColumns,
    pub expense: ExpenseColumns,
    pub attendance: AttendanceColumns,
}

// ── ReportOrchestrator ────────────────────────────────────────────────────────

/// Builds daily and ranged reports on top of a [`TableSource`].
pub struct ReportOrchestrator<S: TableSource> {
    source: S,
    layout: Layout,
}

impl<S: TableSource> ReportOrchestrator<S> {
    pub fn new(source: S) -> Self {
        Self::with_layout(source, Layout::default())
    }

    pub fn with_layout(source: S, layout: Layout) -> Self {
        Self { source, layout }
    }

    /// Assemble the report for a single calendar day.
    ///
    /// The four table fetches run concurrently and write into disjoint
    /// fields, so no ordering is needed between them. A table whose
    /// fetch fails at the transport level degrades to its zeroed
    /// default; the day as a whole fails only when every fetch failed.
    pub async fn day_report(&self, date: NaiveDate) -> Result<DailyReport> {
        let sheet = dates::sheet_name_for_date(date);
        let absen_sheet = dates::attendance_sheet_for_date(date);
        let day = dates::day_token(date);

        let (cargo_res, express_res, expense_res, attendance_res) = tokio::join!(
            self.cargo_totals(&sheet, &day),
            self.express_totals(&sheet, &day),
            self.expense_totals(&sheet, &day),
            self.attendance_records(&absen_sheet, &day),
        );

        let (cargo, cargo_ok) = recover("cargo", date, cargo_res)?;
        let (express, express_ok) = recover("express", date, express_res)?;
        let (pengeluaran, expense_ok) = recover("pengeluaran", date, expense_res)?;
        let (attendance, attendance_ok) = recover("attendance", date, attendance_res)?;

        if !(cargo_ok || express_ok || expense_ok || attendance_ok) {
            return Err(ReportError::Transport {
                sheet,
                range: "*".to_string(),
                message: "every table fetch failed".to_string(),
            });
        }

        Ok(DailyReport {
            date,
            date_display: dates::date_display(date),
            sheet,
            attendance,
            cargo,
            express,
            pengeluaran,
        })
    }

    /// Assemble the report for a closed date range.
    ///
    /// Days are processed sequentially and independently: a day that
    /// loses every table is omitted with a warning. A range in which no
    /// day survived fails with the explicit empty-range condition.
    pub async fn range_report(&self, start: NaiveDate, end: NaiveDate) -> Result<RangeReport> {
        if start > end {
            return Err(ReportError::InvalidRange { start, end });
        }

        let mut daily_reports = Vec::new();
        for date in dates::date_range(start, end) {
            match self.day_report(date).await {
                Ok(report) => daily_reports.push(report),
                Err(e) => warn!("omitting {} from range: {}", date, e),
            }
        }

        if daily_reports.is_empty() {
            return Err(ReportError::EmptyRange { start, end });
        }

        let aggregated = RangeAggregator::reduce(&daily_reports);

        Ok(RangeReport {
            date_range: DateRange { start, end },
            total_days: daily_reports.len() as u32,
            daily_reports,
            aggregated,
        })
    }

    // ── Per-table pipelines ───────────────────────────────────────────────

    async fn cargo_totals(&self, sheet: &str, day: &str) -> Result<CargoTotals> {
        let columns = &self.layout.cargo;
        let grid = self.source.fetch_range(sheet, &columns.range).await?;
        let end = find_section_end(&grid, columns.receipt, SUMMARY_MARKER, 0);
        let rows = DaySplitter::new(columns.date).segment_rows(&grid, day, end);
        debug!("cargo segment for day {}: {} rows", day, rows.len());
        Ok(cargo::tabulate_cargo(&grid, &rows, columns))
    }

    async fn express_totals(&self, sheet: &str, day: &str) -> Result<ExpressTotals> {
        let columns = &self.layout.express;
        let grid = self.source.fetch_range(sheet, &columns.range).await?;
        // Summary lines are filtered per row, so the whole grid is the
        // window here.
        let rows = DaySplitter::new(columns.date).segment_rows(&grid, day, grid.row_count());
        debug!("express segment for day {}: {} rows", day, rows.len());
        Ok(express::tabulate_express(&grid, &rows, columns))
    }

    async fn expense_totals(&self, sheet: &str, day: &str) -> Result<ExpenseTotals> {
        let columns = &self.layout.expense;
        let grid = self.source.fetch_range(sheet, &columns.range).await?;
        let end = find_section_end(&grid, columns.description, SUMMARY_MARKER, 0);
        Ok(expense::tabulate_expenses(&grid, columns, day, end))
    }

    async fn attendance_records(&self, sheet: &str, day: &str) -> Result<Vec<AttendanceRecord>> {
        let columns = &self.layout.attendance;
        let grid = self.source.fetch_range(sheet, &columns.range).await?;
        Ok(attendance::attendance_for_day(&grid, columns, day))
    }
}

// ── Failure recovery ──────────────────────────────────────────────────────────

/// Substitute a zeroed default for one table's transport failure.
///
/// Returns the value plus whether the fetch succeeded; non-transport
/// errors propagate.
fn recover<T: Default>(table: &str, date: NaiveDate, result: Result<T>) -> Result<(T, bool)> {
    match result {
        Ok(value) => Ok((value, true)),
        Err(e) if e.is_transport() => {
            warn!(
                "{} fetch failed for {}, substituting zeroed totals: {}",
                table, date, e
            );
            Ok((T::default(), false))
        }
        Err(e) => Err(e),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
