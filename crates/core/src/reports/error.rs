//! Report error types.

use thiserror::Error;

use crate::hierarchy::ConfigError;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The account configuration is structurally invalid.
    #[error("Invalid account configuration: {0}")]
    Config(#[from] ConfigError),
}
