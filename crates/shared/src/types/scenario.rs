//! Ledger scenarios.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a scenario label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown scenario: {0}")]
pub struct UnknownScenario(pub String);

/// Classification of a ledger value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Posted, realised figures.
    Actuals,
    /// Planned figures.
    Budget,
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Actuals => write!(f, "Actuals"),
            Self::Budget => write!(f, "Budget"),
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "actuals" | "actual" => Ok(Self::Actuals),
            "budget" => Ok(Self::Budget),
            _ => Err(UnknownScenario(s.to_string())),
        }
    }
}
