//! Core domain types for the depot daily-report extractor.
//!
//! Holds the cell and grid primitives, the per-table column schemas,
//! the caller-facing report models, date/sheet-name helpers, the error
//! taxonomy and CLI settings shared by the data and runtime crates.

pub mod cell;
pub mod dates;
pub mod error;
pub mod grid;
pub mod models;
pub mod schema;
pub mod settings;
