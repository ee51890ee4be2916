use chrono::NaiveDate;
use thiserror::Error;

/// All errors produced by the depot report pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The tabular data source could not be reached.
    #[error("Transport failure fetching {sheet}!{range}: {message}")]
    Transport {
        sheet: String,
        range: String,
        message: String,
    },

    /// The data source answered with a non-success HTTP status
    /// (authentication failures included).
    #[error("Data source returned HTTP {status} for {sheet}!{range}")]
    Http {
        status: u16,
        sheet: String,
        range: String,
    },

    /// A date string on the command line could not be parsed.
    #[error("Invalid date \"{0}\": expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The start of a requested range lies after its end.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// No day in the requested range produced a usable record.
    #[error("No data in range {start} to {end}")]
    EmptyRange { start: NaiveDate, end: NaiveDate },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReportError {
    /// Whether this error comes from the external data source itself.
    ///
    /// Transport failures are recoverable per table: the day-level
    /// orchestrator substitutes a zeroed aggregate instead of failing
    /// the whole day.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ReportError::Transport { .. } | ReportError::Http { .. }
        )
    }
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
