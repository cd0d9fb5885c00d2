//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! It turns columnar ledger tables into a rendered profit-and-loss
//! statement.
//!
//! # Modules
//!
//! - `ledger` - Ledger tables, account-keyed amounts, scenario aggregation
//! - `hierarchy` - Account configuration, adjacency, and rollups
//! - `reports` - Formatting, section rendering, headers, gates, and batches

pub mod hierarchy;
pub mod ledger;
pub mod reports;

pub use hierarchy::{AccountConfig, AccountSettings, ConfigError, SectionConfig};
pub use ledger::{AccountAmounts, LedgerRow, LedgerTable};
pub use reports::{ReportError, ReportJob, ReportOutcome, ReportRequest, ReportService};
