//! Profit-and-loss statement generation.
//!
//! This module provides pure business logic for turning ledger tables into
//! a rendered statement:
//! - Display formatting of amounts, percentages and month labels
//! - Four-way rollup totals (month/YTD × actual/budget)
//! - Section rendering with exclusion and zero suppression
//! - Entity headers and report-level gates
//! - Parallel batch runs

pub mod batch;
pub mod error;
pub mod format;
pub mod header;
pub mod render;
pub mod service;
pub mod totals;
pub mod types;

#[cfg(test)]
mod tests;

pub use batch::{BatchResult, ReportJob};
pub use error::ReportError;
pub use render::SectionRenderer;
pub use service::{ReportRequest, ReportService};
pub use totals::StatementTotals;
pub use types::*;
