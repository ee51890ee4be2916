//! Attendance (absen) tab reading.

use report_core::dates;
use report_core::grid::RawGrid;
use report_core::models::AttendanceRecord;
use report_core::schema::AttendanceColumns;

/// Attendance records for one day, in sheet order.
///
/// Attendance rows are individually day-labelled like expense rows, so
/// matching is the same padded/unpadded equality test. An employee is
/// present when the check-in cell is filled; absentees keep a record
/// with `is_present == false` so the caller can list them too.
pub fn attendance_for_day(
    grid: &RawGrid,
    columns: &AttendanceColumns,
    target_day: &str,
) -> Vec<AttendanceRecord> {
    let short_day = dates::unpadded(target_day);
    let mut records = Vec::new();

    for row in 0..grid.row_count() {
        let label = grid.value(row, columns.date).as_text();
        if label != target_day && label != short_day {
            continue;
        }

        let name = grid.text(row, columns.name);
        if name.is_empty() {
            continue;
        }

        let time_in = grid.text(row, columns.time_in);
        let time_out = grid.text(row, columns.time_out);
        let is_present = !time_in.is_empty();
        records.push(AttendanceRecord {
            name,
            time_in,
            time_out,
            is_present,
        });
    }

    records
}

// ── Tests ─────────────────────────────────────────────────────────────────────
