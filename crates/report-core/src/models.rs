use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Row classification ────────────────────────────────────────────────────────

/// Mutually exclusive semantic category of one data row.
///
/// Rows that fit no category (short receipt ids, handwritten notes)
/// are ignored by the accumulators rather than classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCategory {
    /// Channel-routed parcel carrying a long-digit receipt number.
    RegularParcel,
    /// Online-marketplace parcel, tracked by its receipt id.
    OnlineParcel,
    /// Sheet-authored running-total line; never enters any sum.
    SummaryRow,
    /// Expense line with an amount.
    PricedExpense,
    /// Expense line without an amount; collected by description.
    UnpricedExpense,
}

// ── Per-day totals ────────────────────────────────────────────────────────────

/// Per-day aggregate of the cargo (parcel) table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoTotals {
    /// Parcels with a valid long-digit receipt.
    #[serde(default)]
    pub count_regular: u32,
    /// Receipt ids of online-marketplace parcels seen this day.
    #[serde(default)]
    pub online_ids: Vec<String>,
    /// Weight of regular parcels (kg).
    #[serde(default)]
    pub weight_regular: f64,
    /// Weight of online-marketplace parcels (kg).
    #[serde(default)]
    pub weight_online: f64,
    #[serde(default)]
    pub cash: f64,
    #[serde(default)]
    pub bank_bca: f64,
    #[serde(default)]
    pub bank_bri: f64,
    /// Cash-on-delivery amount.
    #[serde(default)]
    pub cod: f64,
    /// Packing fees.
    #[serde(default)]
    pub packing: f64,
}

impl CargoTotals {
    /// Combined bank-transfer amount across both accounts.
    pub fn bank_total(&self) -> f64 {
        self.bank_bca + self.bank_bri
    }

    /// Number of online-marketplace parcels.
    pub fn count_online(&self) -> usize {
        self.online_ids.len()
    }
}

/// Per-day aggregate of the express courier table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressTotals {
    /// Shipments with at least one payment field filled in.
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub cash: f64,
    #[serde(default)]
    pub bank: f64,
    #[serde(default)]
    pub bank_alt: f64,
    #[serde(default)]
    pub packing: f64,
}

/// Per-day aggregate of the pengeluaran (expense) table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseTotals {
    /// Sum of all priced expense lines.
    #[serde(default)]
    pub total: f64,
    /// Descriptions of expense lines written without an amount.
    #[serde(default)]
    pub items_without_price: Vec<String>,
}

/// One employee's attendance entry for a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub name: String,
    #[serde(default)]
    pub time_in: String,
    #[serde(default)]
    pub time_out: String,
    #[serde(default)]
    pub is_present: bool,
}

// ── Caller-facing reports ─────────────────────────────────────────────────────

/// The full report for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub date: NaiveDate,
    /// Human-readable date, e.g. `"5 Agustus 2025"`.
    pub date_display: String,
    /// Monthly tab the day was read from.
    pub sheet: String,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub cargo: CargoTotals,
    #[serde(default)]
    pub express: ExpressTotals,
    #[serde(default)]
    pub pengeluaran: ExpenseTotals,
}

/// Closed date interval of a range report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Cross-day reduction of a range of daily reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeAggregate {
    /// Unique names of employees present on at least one day, sorted.
    #[serde(default)]
    pub employee_names: Vec<String>,
    /// Sum of per-day present-employee counts.
    #[serde(default)]
    pub total_attendance: u32,
    /// Average present employees per day, one decimal.
    #[serde(default)]
    pub average_attendance: f64,
    /// Numeric cargo sums; per-day receipt ids are surfaced through
    /// `online_parcels` instead of `cargo.online_ids`.
    #[serde(default)]
    pub cargo: CargoTotals,
    #[serde(default)]
    pub express: ExpressTotals,
    /// Online-marketplace parcels across the range.
    #[serde(default)]
    pub total_online_parcels: u32,
    #[serde(default)]
    pub total_expense: f64,
    /// One `"<date>: id, id"` entry per day with online parcels, or a
    /// single placeholder entry when the range had none.
    #[serde(default)]
    pub online_parcels: Vec<String>,
    /// One `"<date>: description, description"` entry per day that had
    /// unpriced expense lines.
    #[serde(default)]
    pub items_without_price: Vec<String>,
}

/// The full report for a closed date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeReport {
    pub date_range: DateRange,
    /// Number of days that produced a usable record.
    pub total_days: u32,
    pub daily_reports: Vec<DailyReport>,
    pub aggregated: RangeAggregate,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
