//! Rollup of account totals through the hierarchy.
//!
//! The traversal is an explicit post-order walk over a work stack, so deep
//! hierarchies cannot exhaust the call stack and a loop in the parent
//! relation is reported as [`ConfigError::Cycle`] instead of recursing
//! forever.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tally_shared::AccountId;
use tracing::trace;

use super::config::AccountConfig;
use super::error::ConfigError;
use super::index::HierarchyIndex;
use crate::ledger::AccountAmounts;
use crate::ledger::amounts::accumulate;

#[derive(Debug, Clone, Copy)]
enum Mark {
    Visiting,
    Done(Decimal),
}

struct Frame<'a> {
    account: &'a AccountId,
    next_child: usize,
    total: Decimal,
}

enum Step<'a> {
    Continue,
    Descend(&'a AccountId),
    Finish,
    Cycle(&'a AccountId),
}

/// Accumulates each account's total including its descendants.
///
/// The engine holds no state between calls; every [`RollupEngine::rollup`]
/// owns its memo table.
#[derive(Debug, Clone, Copy)]
pub struct RollupEngine<'a> {
    config: &'a AccountConfig,
    index: &'a HierarchyIndex,
    operational: bool,
}

impl<'a> RollupEngine<'a> {
    /// Creates an engine over a configuration and its index.
    ///
    /// In operational mode, accounts flagged `operational_excluded` do not
    /// contribute to their parent's total.
    #[must_use]
    pub const fn new(config: &'a AccountConfig, index: &'a HierarchyIndex, operational: bool) -> Self {
        Self {
            config,
            index,
            operational,
        }
    }

    /// Rolls `raw` totals up the hierarchy.
    ///
    /// Every configured account gets an entry, including childless and
    /// unreferenced ones. An excluded child's own subtree is always computed;
    /// only its contribution to the parent is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Cycle`] if the parent relation is cyclic.
    pub fn rollup(&self, raw: &AccountAmounts) -> Result<AccountAmounts, ConfigError> {
        let mut marks: HashMap<&'a AccountId, Mark> = HashMap::with_capacity(self.config.len());
        let mut stack: Vec<Frame<'a>> = Vec::new();

        for root in self.config.ids() {
            if marks.contains_key(root) {
                continue;
            }
            marks.insert(root, Mark::Visiting);
            stack.push(Frame {
                account: root,
                next_child: 0,
                total: raw.get(root.as_str()),
            });

            while !stack.is_empty() {
                let step = self.advance(&mut stack, &marks);
                match step {
                    Step::Continue => {}
                    Step::Descend(child) => {
                        marks.insert(child, Mark::Visiting);
                        stack.push(Frame {
                            account: child,
                            next_child: 0,
                            total: raw.get(child.as_str()),
                        });
                    }
                    Step::Finish => {
                        let Some(done) = stack.pop() else { break };
                        trace!(account = %done.account, total = %done.total, "Rolled up account");
                        marks.insert(done.account, Mark::Done(done.total));
                        if let Some(parent) = stack.last_mut() {
                            if self.contributes(done.account.as_str()) {
                                accumulate(&mut parent.total, done.total, parent.account.as_str());
                            }
                        }
                    }
                    Step::Cycle(account) => return Err(Self::cycle_error(&stack, account)),
                }
            }
        }

        Ok(marks
            .into_iter()
            .filter_map(|(account, mark)| match mark {
                Mark::Done(total) => Some((account.clone(), total)),
                Mark::Visiting => None,
            })
            .collect())
    }

    fn advance(&self, stack: &mut [Frame<'a>], marks: &HashMap<&'a AccountId, Mark>) -> Step<'a> {
        let Some(frame) = stack.last_mut() else {
            return Step::Finish;
        };
        let children: &'a [AccountId] = self.index.children(frame.account.as_str());
        let Some(child) = children.get(frame.next_child) else {
            return Step::Finish;
        };
        frame.next_child += 1;

        match marks.get(child) {
            Some(Mark::Done(total)) => {
                if self.contributes(child.as_str()) {
                    accumulate(&mut frame.total, *total, frame.account.as_str());
                }
                Step::Continue
            }
            Some(Mark::Visiting) => Step::Cycle(child),
            None => Step::Descend(child),
        }
    }

    /// Whether `child` adds its total to its parent in the current mode.
    fn contributes(&self, child: &str) -> bool {
        !(self.operational && self.config.is_operational_excluded(child))
    }

    fn cycle_error(stack: &[Frame<'_>], account: &AccountId) -> ConfigError {
        let start = stack
            .iter()
            .position(|f| f.account == account)
            .unwrap_or(0);
        let mut path: Vec<String> = stack[start..]
            .iter()
            .map(|f| f.account.to_string())
            .collect();
        path.push(account.to_string());
        ConfigError::Cycle {
            account: account.to_string(),
            path,
        }
    }
}
