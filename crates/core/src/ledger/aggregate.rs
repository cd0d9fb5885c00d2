//! Scenario-filtered aggregation of ledger rows.

use tally_shared::Scenario;

use super::amounts::AccountAmounts;
use super::table::LedgerRow;

/// Sums ledger rows into per-account totals.
pub struct Aggregator;

impl Aggregator {
    /// Sums the values of every row booked under `scenario`, per account.
    ///
    /// Rows of other scenarios are ignored. Accounts without a matching row
    /// are absent from the result.
    #[must_use]
    pub fn totals<'a, I>(rows: I, scenario: Scenario) -> AccountAmounts
    where
        I: IntoIterator<Item = &'a LedgerRow>,
    {
        let mut totals = AccountAmounts::new();
        for row in rows.into_iter().filter(|r| r.scenario == scenario) {
            totals.add(&row.account, row.value);
        }
        totals
    }
}
