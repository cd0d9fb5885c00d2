//! Validated account identifiers.
//!
//! Ledger rows, the account hierarchy and the section layout all refer to
//! accounts by name (e.g. `"Income"`, `"Salaries & Wages"`). Wrapping those
//! names in [`AccountId`] keeps blank identifiers out of every keyed map.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an account identifier is blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Account identifier must not be blank")]
pub struct InvalidAccountId;

/// Identifier of an account in the chart of accounts.
///
/// Surrounding whitespace is trimmed on construction; the trimmed value must
/// be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Creates a validated account identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAccountId`] if the trimmed name is empty.
    pub fn new(name: impl AsRef<str>) -> Result<Self, InvalidAccountId> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidAccountId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = InvalidAccountId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountId {
    type Error = InvalidAccountId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for AccountId {
    type Error = InvalidAccountId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.into_inner()
    }
}
