//! Hierarchy configuration errors.

use thiserror::Error;

/// Structural errors in the account configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The parent relation loops back on itself.
    #[error("Account hierarchy contains a cycle at {account}: {}", .path.join(" -> "))]
    Cycle {
        /// Account that was reached twice.
        account: String,
        /// Accounts on the cycle, ending with `account`.
        path: Vec<String>,
    },
}
