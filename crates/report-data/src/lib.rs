//! Data extraction layer for the depot report.
//!
//! Responsible for fetching raw ranges from the workbook, locating
//! section boundaries, splitting rows into per-day segments, folding
//! rows into typed per-table totals and reducing day records across a
//! date range.

pub mod aggregator;
pub mod attendance;
pub mod cargo;
pub mod expense;
pub mod express;
pub mod locate;
pub mod segment;
pub mod source;

pub use report_core as core;
