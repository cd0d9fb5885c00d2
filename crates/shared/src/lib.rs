//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides common types used across all other crates:
//! - Validated account identifiers
//! - Ledger scenarios (actuals vs budget)
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{AccountId, InvalidAccountId, Scenario, UnknownScenario};
