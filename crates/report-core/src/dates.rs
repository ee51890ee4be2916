use chrono::{Datelike, NaiveDate};

// ── Month and sheet naming ────────────────────────────────────────────────────

/// Indonesian month names, January first.
const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Monthly tab name holding a date's rows: uppercase month plus
/// two-digit year, e.g. `"AGUSTUS 25"`.
pub fn sheet_name_for_date(date: NaiveDate) -> String {
    format!(
        "{} {:02}",
        MONTH_NAMES[date.month0() as usize].to_uppercase(),
        date.year().rem_euclid(100)
    )
}

/// Attendance tab for the same month, e.g. `"ABSEN AGUSTUS 25"`.
pub fn attendance_sheet_for_date(date: NaiveDate) -> String {
    format!("ABSEN {}", sheet_name_for_date(date))
}

// ── Day tokens and display ────────────────────────────────────────────────────

/// Zero-padded two-digit day-of-month token, e.g. `"05"`.
pub fn day_token(date: NaiveDate) -> String {
    format!("{:02}", date.day())
}

/// Unpadded form of a padded day token: `"05"` → `"5"`, `"10"` → `"10"`.
pub fn unpadded(day: &str) -> &str {
    let stripped = day.trim_start_matches('0');
    if stripped.is_empty() {
        day
    } else {
        stripped
    }
}

/// Human-readable date in the workbook's language, e.g.
/// `"5 Agustus 2025"`.
pub fn date_display(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

// ── Range iteration ───────────────────────────────────────────────────────────

/// Inclusive list of days from `start` to `end`; empty when
/// `start > end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sheet_name_for_date() {
        assert_eq!(sheet_name_for_date(date(2025, 8, 5)), "AGUSTUS 25");
        assert_eq!(sheet_name_for_date(date(2026, 1, 31)), "JANUARI 26");
        assert_eq!(sheet_name_for_date(date(2024, 12, 1)), "DESEMBER 24");
    }

    #[test]
    fn test_attendance_sheet_for_date() {
        assert_eq!(
            attendance_sheet_for_date(date(2025, 8, 5)),
            "ABSEN AGUSTUS 25"
        );
    }

    #[test]
    fn test_day_token_is_zero_padded() {
        assert_eq!(day_token(date(2025, 8, 5)), "05");
        assert_eq!(day_token(date(2025, 8, 31)), "31");
    }

    #[test]
    fn test_unpadded() {
        assert_eq!(unpadded("05"), "5");
        assert_eq!(unpadded("10"), "10");
        assert_eq!(unpadded("31"), "31");
    }

    #[test]
    fn test_date_display() {
        assert_eq!(date_display(date(2025, 8, 5)), "5 Agustus 2025");
        assert_eq!(date_display(date(2025, 3, 17)), "17 Maret 2025");
    }

    #[test]
    fn test_date_range_inclusive() {
        let days = date_range(date(2025, 8, 30), date(2025, 9, 2));
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date(2025, 8, 30));
        assert_eq!(days[3], date(2025, 9, 2));
    }

    #[test]
    fn test_date_range_single_day() {
        let days = date_range(date(2025, 8, 5), date(2025, 8, 5));
        assert_eq!(days, vec![date(2025, 8, 5)]);
    }

    #[test]
    fn test_date_range_inverted_is_empty() {
        assert!(date_range(date(2025, 8, 5), date(2025, 8, 1)).is_empty());
    }
}
