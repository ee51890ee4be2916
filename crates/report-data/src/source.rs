//! Tabular data source abstraction and the Sheets values client.
//!
//! The core never talks HTTP directly: it consumes [`TableSource`],
//! which returns an empty grid when a range holds no data and reserves
//! errors for transport-level failures.

use std::collections::{HashMap, HashSet};
use std::future::Future;

use report_core::error::{ReportError, Result};
use report_core::grid::{RangeRef, RawGrid};
use serde_json::Value;
use tracing::debug;

// ── TableSource ───────────────────────────────────────────────────────────────

/// Remote tabular data source supplying rectangular cell ranges.
pub trait TableSource {
    /// Fetch one inclusive range from the named sheet.
    ///
    /// A range without data must yield an empty grid, not an error;
    /// errors are reserved for connectivity and authorisation failures.
    fn fetch_range(
        &self,
        sheet: &str,
        range: &RangeRef,
    ) -> impl Future<Output = Result<RawGrid>> + Send;
}

// ── SheetsClient ──────────────────────────────────────────────────────────────

/// Google Sheets values-API client.
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    api_key: String,
}

impl SheetsClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://sheets.googleapis.com";

    pub fn new(spreadsheet_id: String, api_key: String) -> Self {
        Self::with_base_url(spreadsheet_id, api_key, Self::DEFAULT_BASE_URL.to_string())
    }

    /// Client with an explicit endpoint, used by tests.
    pub fn with_base_url(spreadsheet_id: String, api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            spreadsheet_id,
            api_key,
        }
    }

    /// URL of the values endpoint for one `sheet!range` reference.
    fn values_url(&self, sheet: &str, range: &RangeRef) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url,
            self.spreadsheet_id,
            urlencoding::encode(&format!("{}!{}", sheet, range))
        )
    }

    fn transport_error(sheet: &str, range: &RangeRef, message: impl ToString) -> ReportError {
        ReportError::Transport {
            sheet: sheet.to_string(),
            range: range.to_string(),
            message: message.to_string(),
        }
    }
}

impl TableSource for SheetsClient {
    async fn fetch_range(&self, sheet: &str, range: &RangeRef) -> Result<RawGrid> {
        let url = self.values_url(sheet, range);
        debug!("fetching {}!{}", sheet, range);

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| Self::transport_error(sheet, range, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Http {
                status: status.as_u16(),
                sheet: sheet.to_string(),
                range: range.to_string(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Self::transport_error(sheet, range, e))?;

        Ok(parse_values_response(&body))
    }
}

/// Convert a values-API response body into a [`RawGrid`].
///
/// A response without a `values` key means the range holds no data.
pub fn parse_values_response(body: &Value) -> RawGrid {
    match body.get("values").and_then(|v| v.as_array()) {
        Some(rows) => RawGrid::new(
            rows.iter()
                .map(|row| row.as_array().cloned().unwrap_or_default())
                .collect(),
        ),
        None => RawGrid::empty(),
    }
}

// ── StaticSource ──────────────────────────────────────────────────────────────

/// In-memory [`TableSource`] for tests and offline runs.
///
/// Unknown `sheet!range` keys yield an empty grid, matching the real
/// client's no-data behaviour; individual keys or whole sheets can be
/// made to fail with a simulated transport error.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    grids: HashMap<(String, String), RawGrid>,
    failing_sheets: HashSet<String>,
    failing_ranges: HashSet<(String, String)>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sheet: &str, range: &RangeRef, grid: RawGrid) {
        self.grids
            .insert((sheet.to_string(), range.to_string()), grid);
    }

    /// Simulate a transport failure for every range of `sheet`.
    pub fn fail_sheet(&mut self, sheet: &str) {
        self.failing_sheets.insert(sheet.to_string());
    }

    /// Simulate a transport failure for one `sheet!range` key.
    pub fn fail_range(&mut self, sheet: &str, range: &RangeRef) {
        self.failing_ranges
            .insert((sheet.to_string(), range.to_string()));
    }
}

impl TableSource for StaticSource {
    async fn fetch_range(&self, sheet: &str, range: &RangeRef) -> Result<RawGrid> {
        let key = (sheet.to_string(), range.to_string());
        if self.failing_sheets.contains(sheet) || self.failing_ranges.contains(&key) {
            return Err(ReportError::Transport {
                sheet: sheet.to_string(),
                range: range.to_string(),
                message: "simulated connection failure".to_string(),
            });
        }
        Ok(self.grids.get(&key).cloned().unwrap_or_else(RawGrid::empty))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
