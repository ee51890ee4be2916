//! Cross-day reduction of daily reports.

use std::collections::BTreeSet;

use report_core::models::{DailyReport, RangeAggregate};

/// Placeholder entry when no day in the range had online parcels.
const NO_ONLINE_PARCELS: &str = "Tidak ada";

/// Stateless reducer folding ordered day records into range totals.
pub struct RangeAggregator;

impl RangeAggregator {
    /// Reduce an ordered sequence of day reports.
    ///
    /// The orchestrator guarantees a non-empty input: a range in which
    /// no day produced a usable record fails before reduction.
    pub fn reduce(reports: &[DailyReport]) -> RangeAggregate {
        let mut agg = RangeAggregate::default();
        let mut names: BTreeSet<String> = BTreeSet::new();

        for report in reports {
            for record in report.attendance.iter().filter(|r| r.is_present) {
                names.insert(record.name.clone());
                agg.total_attendance += 1;
            }

            agg.cargo.count_regular += report.cargo.count_regular;
            agg.cargo.weight_regular += report.cargo.weight_regular;
            agg.cargo.weight_online += report.cargo.weight_online;
            agg.cargo.cash += report.cargo.cash;
            agg.cargo.bank_bca += report.cargo.bank_bca;
            agg.cargo.bank_bri += report.cargo.bank_bri;
            agg.cargo.cod += report.cargo.cod;
            agg.cargo.packing += report.cargo.packing;
            agg.total_online_parcels += report.cargo.count_online() as u32;

            agg.express.count += report.express.count;
            agg.express.cash += report.express.cash;
            agg.express.bank += report.express.bank;
            agg.express.bank_alt += report.express.bank_alt;
            agg.express.packing += report.express.packing;

            agg.total_expense += report.pengeluaran.total;

            if !report.cargo.online_ids.is_empty() {
                agg.online_parcels.push(format!(
                    "{}: {}",
                    report.date,
                    report.cargo.online_ids.join(", ")
                ));
            }
            if !report.pengeluaran.items_without_price.is_empty() {
                agg.items_without_price.push(format!(
                    "{}: {}",
                    report.date,
                    report.pengeluaran.items_without_price.join(", ")
                ));
            }
        }

        if agg.online_parcels.is_empty() {
            agg.online_parcels.push(NO_ONLINE_PARCELS.to_string());
        }

        agg.employee_names = names.into_iter().collect();
        agg.average_attendance = if reports.is_empty() {
            0.0
        } else {
            round_one_decimal(f64::from(agg.total_attendance) / reports.len() as f64)
        };

        agg
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use report_core::models::{
        AttendanceRecord, CargoTotals, ExpenseTotals, ExpressTotals,
    };

    fn present(name: &str) -> AttendanceRecord {
        AttendanceRecord {
            name: name.to_string(),
            time_in: "08:00".to_string(),
            time_out: "17:00".to_string(),
            is_present: true,
        }
    }

    fn absent(name: &str) -> AttendanceRecord {
        AttendanceRecord {
            name: name.to_string(),
            is_present: false,
            ..Default::default()
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    fn report(d: u32) -> DailyReport {
        DailyReport {
            date: day(d),
            date_display: format!("{} Agustus 2025", d),
            sheet: "AGUSTUS 25".to_string(),
            attendance: vec![],
            cargo: CargoTotals::default(),
            express: ExpressTotals::default(),
            pengeluaran: ExpenseTotals::default(),
        }
    }

    #[test]
    fn test_single_day_reduction_matches_the_day() {
        let mut d1 = report(5);
        d1.cargo.count_regular = 3;
        d1.cargo.cash = 15_000.0;
        d1.express.count = 2;
        d1.pengeluaran.total = 40_000.0;

        let agg = RangeAggregator::reduce(std::slice::from_ref(&d1));

        assert_eq!(agg.cargo.count_regular, 3);
        assert_eq!(agg.cargo.cash, 15_000.0);
        assert_eq!(agg.express.count, 2);
        assert_eq!(agg.total_expense, 40_000.0);
    }

    #[test]
    fn test_numeric_fields_are_additive() {
        let mut d1 = report(5);
        d1.cargo.weight_regular = 2.5;
        d1.cargo.bank_bca = 1000.0;
        d1.express.packing = 500.0;
        d1.pengeluaran.total = 10_000.0;

        let mut d2 = report(6);
        d2.cargo.weight_regular = 1.5;
        d2.cargo.bank_bca = 3000.0;
        d2.express.packing = 250.0;
        d2.pengeluaran.total = 5_000.0;

        let one = RangeAggregator::reduce(std::slice::from_ref(&d1));
        let both = RangeAggregator::reduce(&[d1, d2]);

        assert_eq!(both.cargo.weight_regular, one.cargo.weight_regular + 1.5);
        assert_eq!(both.cargo.bank_bca, one.cargo.bank_bca + 3000.0);
        assert_eq!(both.express.packing, one.express.packing + 250.0);
        assert_eq!(both.total_expense, one.total_expense + 5_000.0);
    }

    #[test]
    fn test_unique_names_union_across_days() {
        let mut d1 = report(5);
        d1.attendance = vec![present("Budi"), present("Sari"), absent("Tono")];
        let mut d2 = report(6);
        d2.attendance = vec![present("Budi"), present("Tono")];

        let agg = RangeAggregator::reduce(&[d1, d2]);

        assert_eq!(
            agg.employee_names,
            vec!["Budi".to_string(), "Sari".to_string(), "Tono".to_string()]
        );
        assert_eq!(agg.total_attendance, 4);
    }

    #[test]
    fn test_average_attendance_rounds_to_one_decimal() {
        let mut d1 = report(5);
        d1.attendance = vec![present("Budi"), present("Sari")];
        let mut d2 = report(6);
        d2.attendance = vec![present("Budi")];

        let agg = RangeAggregator::reduce(&[d1, d2]);
        assert_eq!(agg.average_attendance, 1.5);

        let mut d3 = report(7);
        d3.attendance = vec![present("Budi")];
        let mut d4 = report(8);
        d4.attendance = vec![present("Budi"), present("Sari")];
        let mut d5 = report(9);
        d5.attendance = vec![];

        // 4 present over 3 days = 1.333… → 1.3
        let agg = RangeAggregator::reduce(&[d3, d4, d5]);
        assert_eq!(agg.average_attendance, 1.3);
    }

    #[test]
    fn test_online_parcels_formatted_per_day() {
        let mut d1 = report(5);
        d1.cargo.online_ids = vec!["Shopee-882".to_string(), "Lazada-3".to_string()];
        let d2 = report(6);
        let mut d3 = report(7);
        d3.cargo.online_ids = vec!["Tokopedia-9".to_string()];

        let agg = RangeAggregator::reduce(&[d1, d2, d3]);

        assert_eq!(
            agg.online_parcels,
            vec![
                "2025-08-05: Shopee-882, Lazada-3".to_string(),
                "2025-08-07: Tokopedia-9".to_string(),
            ]
        );
        assert_eq!(agg.total_online_parcels, 3);
        // The aggregate's cargo record carries no per-day ids.
        assert!(agg.cargo.online_ids.is_empty());
    }

    #[test]
    fn test_online_parcels_sentinel_when_none() {
        let agg = RangeAggregator::reduce(&[report(5), report(6)]);
        assert_eq!(agg.online_parcels, vec!["Tidak ada".to_string()]);
        assert_eq!(agg.total_online_parcels, 0);
    }

    #[test]
    fn test_items_without_price_formatted_per_day() {
        let mut d1 = report(5);
        d1.pengeluaran.items_without_price = vec!["bensin".to_string(), "parkir".to_string()];
        let d2 = report(6);

        let agg = RangeAggregator::reduce(&[d1, d2]);

        assert_eq!(
            agg.items_without_price,
            vec!["2025-08-05: bensin, parkir".to_string()]
        );
    }

    #[test]
    fn test_items_without_price_stays_empty_when_none() {
        let agg = RangeAggregator::reduce(&[report(5)]);
        assert!(agg.items_without_price.is_empty());
    }
}
