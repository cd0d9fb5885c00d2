//! Parent → children adjacency.

use std::collections::HashMap;

use tally_shared::AccountId;
use tracing::debug;

use super::config::AccountConfig;

/// Children of each account, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    children: HashMap<AccountId, Vec<AccountId>>,
}

impl HierarchyIndex {
    /// Builds the index by scanning the configuration once.
    #[must_use]
    pub fn build(config: &AccountConfig) -> Self {
        let mut children: HashMap<AccountId, Vec<AccountId>> = HashMap::new();
        for (account, settings) in config.iter() {
            if let Some(parent) = &settings.parent {
                if !config.contains(parent.as_str()) {
                    debug!(%account, %parent, "Parent account is not configured");
                }
                children
                    .entry(parent.clone())
                    .or_default()
                    .push(account.clone());
            }
        }
        Self { children }
    }

    /// Returns the children of `account`; empty for leaves and unknown accounts.
    #[must_use]
    pub fn children(&self, account: &str) -> &[AccountId] {
        self.children.get(account).map_or(&[], Vec::as_slice)
    }
}
