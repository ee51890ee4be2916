mod bootstrap;

use anyhow::Result;
use chrono::NaiveDate;
use report_core::error::ReportError;
use report_core::settings::Settings;
use report_data::source::SheetsClient;
use report_runtime::orchestrator::ReportOrchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("depot-report v{} starting", env!("CARGO_PKG_VERSION"));

    let spreadsheet_id = settings.spreadsheet_id.clone().ok_or_else(|| {
        ReportError::Config(
            "missing workbook id; pass --spreadsheet-id or set DEPOT_SPREADSHEET_ID".to_string(),
        )
    })?;
    let api_key = settings.api_key.clone().ok_or_else(|| {
        ReportError::Config(
            "missing API key; pass --api-key or set DEPOT_SHEETS_API_KEY".to_string(),
        )
    })?;

    let client = SheetsClient::new(spreadsheet_id, api_key);
    let orchestrator = ReportOrchestrator::new(client);

    let output = match (&settings.from, &settings.to) {
        (Some(from), Some(to)) => {
            let start = parse_date(from)?;
            let end = parse_date(to)?;
            tracing::info!("running range report {} to {}", start, end);

            let report = orchestrator.range_report(start, end).await?;
            to_json(&report, settings.compact)?
        }
        _ => {
            let date = match &settings.date {
                Some(d) => parse_date(d)?,
                None => chrono::Local::now().date_naive(),
            };
            tracing::info!("running daily report for {}", date);

            let report = orchestrator.day_report(date).await?;
            to_json(&report, settings.compact)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Parse a `YYYY-MM-DD` command-line date.
fn parse_date(s: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ReportError::InvalidDate(s.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String, ReportError> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.map_err(ReportError::from)
}
