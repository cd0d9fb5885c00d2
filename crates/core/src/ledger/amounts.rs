//! Account-keyed amount containers.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::AccountId;
use tracing::warn;

/// Adds `amount` to `total`, saturating at the `Decimal` bounds.
///
/// Totals past the representable range are clamped rather than aborting the
/// report; the clamp is logged against `account`.
pub(crate) fn accumulate(total: &mut Decimal, amount: Decimal, account: &str) {
    let current = *total;
    *total = current.checked_add(amount).unwrap_or_else(|| {
        warn!(%account, "Amount overflowed; total saturated");
        current.saturating_add(amount)
    });
}

/// Per-account totals, used for both raw aggregates and rollups.
///
/// An account that is not present reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountAmounts(HashMap<AccountId, Decimal>);

impl AccountAmounts {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the amount for `account`, or zero when absent.
    #[must_use]
    pub fn get(&self, account: &str) -> Decimal {
        self.0.get(account).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns true if the account has an entry.
    #[must_use]
    pub fn contains(&self, account: &str) -> bool {
        self.0.contains_key(account)
    }

    /// Adds `amount` to the account's running total, saturating on overflow.
    pub fn add(&mut self, account: &AccountId, amount: Decimal) {
        let total = self.0.entry(account.clone()).or_insert(Decimal::ZERO);
        accumulate(total, amount, account.as_str());
    }

    /// Sets the account's total, replacing any previous value.
    pub fn insert(&mut self, account: AccountId, amount: Decimal) {
        self.0.insert(account, amount);
    }

    /// Number of accounts with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no account has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(account, amount)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &Decimal)> {
        self.0.iter()
    }
}

impl FromIterator<(AccountId, Decimal)> for AccountAmounts {
    fn from_iter<I: IntoIterator<Item = (AccountId, Decimal)>>(iter: I) -> Self {
        let mut amounts = Self::new();
        for (account, amount) in iter {
            amounts.add(&account, amount);
        }
        amounts
    }
}
