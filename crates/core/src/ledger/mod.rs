//! Ledger input handling.
//!
//! This module turns the columnar ledger tables handed over by the data
//! warehouse into typed rows and per-account totals:
//! - Columnar tables and lenient row extraction
//! - Account-keyed amount containers
//! - Scenario-filtered aggregation

pub mod aggregate;
pub mod amounts;
pub mod table;

pub use aggregate::Aggregator;
pub use amounts::AccountAmounts;
pub use table::{LedgerRow, LedgerTable};
