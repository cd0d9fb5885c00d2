//! Columnar ledger tables.
//!
//! The warehouse delivers each period as three parallel columns:
//!
//! ```json
//! { "Account": ["Income", "Rent"], "Value": [1200.5, "300"], "Scenario": ["Actuals", "Budget"] }
//! ```
//!
//! Extraction is lenient: cells that cannot be read are coerced or skipped
//! rather than rejected.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tally_shared::{AccountId, Scenario};
use tracing::{debug, warn};

/// One ledger line for a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    /// Account the value is booked against.
    pub account: AccountId,
    /// Actuals or budget.
    pub scenario: Scenario,
    /// Booked value.
    pub value: Decimal,
}

impl LedgerRow {
    /// Creates a ledger row.
    #[must_use]
    pub const fn new(account: AccountId, scenario: Scenario, value: Decimal) -> Self {
        Self {
            account,
            scenario,
            value,
        }
    }
}

/// Columnar ledger table for one period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerTable {
    /// Account column.
    #[serde(rename = "Account", default)]
    pub account: Option<Vec<Option<String>>>,
    /// Value column. Cells may be numbers, numeric strings, or anything else.
    #[serde(rename = "Value", default)]
    pub value: Option<Vec<Value>>,
    /// Scenario column.
    #[serde(rename = "Scenario", default)]
    pub scenario: Option<Vec<Option<String>>>,
}

impl LedgerTable {
    /// Builds a table from typed rows.
    #[must_use]
    pub fn from_rows(rows: &[LedgerRow]) -> Self {
        Self {
            account: Some(rows.iter().map(|r| Some(r.account.to_string())).collect()),
            value: Some(
                rows.iter()
                    .map(|r| Value::String(r.value.to_string()))
                    .collect(),
            ),
            scenario: Some(rows.iter().map(|r| Some(r.scenario.to_string())).collect()),
        }
    }

    /// Returns true if both the account and value columns are present.
    #[must_use]
    pub fn has_columns(&self) -> bool {
        self.account.is_some() && self.value.is_some()
    }

    /// Extracts typed rows.
    ///
    /// Rows with a blank account or an unrecognised scenario are skipped.
    /// Columns of unequal length are zipped to the shortest one. A table
    /// without a scenario column yields no rows.
    #[must_use]
    pub fn rows(&self) -> Vec<LedgerRow> {
        let (Some(accounts), Some(values), Some(scenarios)) =
            (&self.account, &self.value, &self.scenario)
        else {
            return Vec::new();
        };

        if accounts.len() != values.len() || accounts.len() != scenarios.len() {
            warn!(
                accounts = accounts.len(),
                values = values.len(),
                scenarios = scenarios.len(),
                "Ledger columns have unequal lengths, extra cells ignored"
            );
        }

        let mut skipped = 0usize;
        let rows: Vec<LedgerRow> = accounts
            .iter()
            .zip(values)
            .zip(scenarios)
            .filter_map(|((account, value), scenario)| {
                let account = account.as_deref().and_then(|a| AccountId::new(a).ok());
                let scenario = scenario.as_deref().and_then(|s| Scenario::from_str(s).ok());
                match (account, scenario) {
                    (Some(account), Some(scenario)) => {
                        Some(LedgerRow::new(account, scenario, coerce_amount(value)))
                    }
                    _ => {
                        skipped += 1;
                        None
                    }
                }
            })
            .collect();

        if skipped > 0 {
            debug!(skipped, "Skipped ledger rows without account or scenario");
        }
        rows
    }
}

/// Reads a JSON cell as a decimal amount, coercing anything unreadable to zero.
#[must_use]
pub fn coerce_amount(cell: &Value) -> Decimal {
    match cell {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => Decimal::ZERO,
    }
}

fn parse_decimal(text: &str) -> Decimal {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .unwrap_or(Decimal::ZERO)
}
