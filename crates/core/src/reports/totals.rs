//! Four-way rollup totals for one report.

use tally_shared::Scenario;
use tracing::debug;

use super::types::PeriodFigures;
use crate::hierarchy::{AccountConfig, ConfigError, HierarchyIndex, RollupEngine};
use crate::ledger::{AccountAmounts, Aggregator, LedgerTable};

/// Account whose rollup is the denominator of every percentage column.
pub const INCOME_ACCOUNT: &str = "Income";

/// Rolled totals for the month and YTD windows, actuals and budget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementTotals {
    /// Month, actuals.
    pub month_actual: AccountAmounts,
    /// Month, budget.
    pub month_budget: AccountAmounts,
    /// Year to date, actuals.
    pub ytd_actual: AccountAmounts,
    /// Year to date, budget.
    pub ytd_budget: AccountAmounts,
}

impl StatementTotals {
    /// Aggregates both ledger tables and rolls each of the four totals up
    /// the hierarchy independently.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Cycle`] if the parent relation is cyclic.
    pub fn compute(
        month: &LedgerTable,
        ytd: &LedgerTable,
        config: &AccountConfig,
        index: &HierarchyIndex,
        operational: bool,
    ) -> Result<Self, ConfigError> {
        let engine = RollupEngine::new(config, index, operational);
        let month_rows = month.rows();
        let ytd_rows = ytd.rows();
        debug!(
            month_rows = month_rows.len(),
            ytd_rows = ytd_rows.len(),
            accounts = config.len(),
            operational,
            "Computing statement totals"
        );

        Ok(Self {
            month_actual: engine.rollup(&Aggregator::totals(&month_rows, Scenario::Actuals))?,
            month_budget: engine.rollup(&Aggregator::totals(&month_rows, Scenario::Budget))?,
            ytd_actual: engine.rollup(&Aggregator::totals(&ytd_rows, Scenario::Actuals))?,
            ytd_budget: engine.rollup(&Aggregator::totals(&ytd_rows, Scenario::Budget))?,
        })
    }

    /// The four rolled figures of `account`; zero where absent.
    #[must_use]
    pub fn figures(&self, account: &str) -> PeriodFigures {
        PeriodFigures {
            month_actual: self.month_actual.get(account),
            month_budget: self.month_budget.get(account),
            ytd_actual: self.ytd_actual.get(account),
            ytd_budget: self.ytd_budget.get(account),
        }
    }

    /// The rolled figures of the income account.
    #[must_use]
    pub fn income(&self) -> PeriodFigures {
        self.figures(INCOME_ACCOUNT)
    }
}
