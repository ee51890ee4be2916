//! Column layouts of the workbook's logical tables.
//!
//! The sheets are hand-maintained and drift over time; every positional
//! offset lives here so a layout change is a one-place edit. Offsets
//! are relative to each table's fetched range, not to column A.

use crate::grid::RangeRef;

/// Row scan bound used when a section marker is never found.
///
/// Generous on purpose: downstream code only loses trailing rows it
/// would otherwise not have read.
pub const SECTION_FALLBACK_ROWS: usize = 250;

/// Marker text of sheet-authored summary lines and section ends.
pub const SUMMARY_MARKER: &str = "total";

/// Marketplace channel names recognised inside cargo receipt ids.
///
/// Matched case-insensitively as substrings, so keep these lowercase.
pub const MARKETPLACE_NAMES: &[&str] = &["shopee", "tokopedia", "lazada", "tiktok", "bukalapak"];

// ── Cargo table ───────────────────────────────────────────────────────────────

/// Layout of the cargo (parcel) table.
///
/// Column 4 of the range holds the tariff class and is not read.
#[derive(Debug, Clone)]
pub struct CargoColumns {
    pub date: usize,
    pub receipt: usize,
    pub destination: usize,
    pub weight: usize,
    pub cash: usize,
    pub bank_bca: usize,
    pub bank_bri: usize,
    pub cod: usize,
    pub packing: usize,
    pub range: RangeRef,
}

impl Default for CargoColumns {
    fn default() -> Self {
        Self {
            date: 0,
            receipt: 1,
            destination: 2,
            weight: 3,
            cash: 5,
            bank_bca: 6,
            bank_bri: 7,
            cod: 8,
            packing: 9,
            range: RangeRef::new(0, 9, 9, 300),
        }
    }
}

// ── Express table ─────────────────────────────────────────────────────────────

/// Layout of the express courier table.
#[derive(Debug, Clone)]
pub struct ExpressColumns {
    pub date: usize,
    pub cash: usize,
    pub bank: usize,
    pub bank_alt: usize,
    pub packing: usize,
    pub range: RangeRef,
}

impl Default for ExpressColumns {
    fn default() -> Self {
        Self {
            date: 0,
            cash: 3,
            bank: 4,
            bank_alt: 5,
            packing: 6,
            range: RangeRef::new(11, 9, 17, 300),
        }
    }
}

// ── Expense table ─────────────────────────────────────────────────────────────

/// Layout of the pengeluaran (expense) table.
#[derive(Debug, Clone)]
pub struct ExpenseColumns {
    pub date: usize,
    pub description: usize,
    pub amount: usize,
    pub range: RangeRef,
}

impl Default for ExpenseColumns {
    fn default() -> Self {
        Self {
            date: 0,
            description: 1,
            amount: 2,
            range: RangeRef::new(19, 9, 21, 300),
        }
    }
}

// ── Attendance table ──────────────────────────────────────────────────────────

/// Layout of the attendance (absen) tab.
#[derive(Debug, Clone)]
pub struct AttendanceColumns {
    pub date: usize,
    pub name: usize,
    pub time_in: usize,
    pub time_out: usize,
    pub range: RangeRef,
}

impl Default for AttendanceColumns {
    fn default() -> Self {
        Self {
            date: 0,
            name: 1,
            time_in: 2,
            time_out: 3,
            range: RangeRef::new(0, 3, 4, 100),
        }
    }
}
