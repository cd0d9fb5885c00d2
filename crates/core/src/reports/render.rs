//! Section rendering.
//!
//! Rows are emitted depth-first with children before their parent, so a
//! rendered section reads bottom-up: detail lines first, the subtotal they
//! roll into last.

use tally_shared::AccountId;
use tracing::debug;

use super::format::{format_amount, is_negligible, percent_of};
use super::totals::StatementTotals;
use super::types::{AccountRow, PeriodFigures, ReportRow, RowPercents, RowValues, SectionBlock};
use crate::hierarchy::{AccountConfig, HierarchyIndex, SectionConfig};

/// Walks the section layout and the hierarchy to produce section blocks.
///
/// The hierarchy must be acyclic; [`StatementTotals::compute`] rejects
/// cyclic configurations before anything is rendered.
pub struct SectionRenderer<'a> {
    config: &'a AccountConfig,
    sections: &'a SectionConfig,
    index: &'a HierarchyIndex,
    totals: &'a StatementTotals,
    income: PeriodFigures,
    operational: bool,
}

impl<'a> SectionRenderer<'a> {
    /// Creates a renderer.
    #[must_use]
    pub fn new(
        config: &'a AccountConfig,
        sections: &'a SectionConfig,
        index: &'a HierarchyIndex,
        totals: &'a StatementTotals,
        operational: bool,
    ) -> Self {
        Self {
            config,
            sections,
            index,
            totals,
            income: totals.income(),
            operational,
        }
    }

    /// Renders every section in layout order.
    #[must_use]
    pub fn render(&self) -> Vec<SectionBlock> {
        self.sections
            .iter()
            .map(|section| {
                let mut rows = vec![ReportRow::SectionHeader {
                    label: section.name.clone(),
                }];
                for account in &section.accounts {
                    self.render_node(account, 1, &mut rows);
                }
                debug!(section = %section.name, rows = rows.len() - 1, "Rendered section");
                SectionBlock {
                    name: section.name.clone(),
                    rows,
                }
            })
            .collect()
    }

    /// Whether `account` is hidden in the current mode.
    #[must_use]
    pub fn is_excluded(&self, account: &str) -> bool {
        let hidden = self.config.is_display_excluded(account);
        if self.operational {
            hidden || self.config.is_operational_excluded(account)
        } else {
            hidden
        }
    }

    fn render_node(&self, account: &AccountId, depth: u32, rows: &mut Vec<ReportRow>) {
        let children = self.index.children(account.as_str());

        if self.is_excluded(account.as_str()) {
            for child in children {
                self.render_node(child, depth, rows);
            }
            return;
        }

        // Budget-only activity is suppressed as well.
        let figures = self.totals.figures(account.as_str());
        if is_negligible(figures.actual_activity()) {
            return;
        }

        for child in children {
            self.render_node(child, depth + 1, rows);
        }

        let bold = children.iter().any(|c| !self.is_excluded(c.as_str()))
            || self.sections.is_top_level(account.as_str());
        rows.push(ReportRow::Account(AccountRow {
            account: account.clone(),
            label: account.to_string(),
            depth,
            amounts: figures,
            values: Self::values(&figures),
            percents: self.percents(&figures),
            bold,
            double_lines: self.config.has_double_lines(account.as_str()),
        }));
    }

    fn values(figures: &PeriodFigures) -> RowValues {
        RowValues {
            month_actual: format_amount(figures.month_actual),
            month_budget: format_amount(figures.month_budget),
            month_variance: format_amount(figures.month_variance()),
            ytd_actual: format_amount(figures.ytd_actual),
            ytd_budget: format_amount(figures.ytd_budget),
            ytd_variance: format_amount(figures.ytd_variance()),
        }
    }

    fn percents(&self, figures: &PeriodFigures) -> RowPercents {
        RowPercents {
            month_actual: percent_of(figures.month_actual, self.income.month_actual),
            month_budget: percent_of(figures.month_budget, self.income.month_budget),
            ytd_actual: percent_of(figures.ytd_actual, self.income.ytd_actual),
            ytd_budget: percent_of(figures.ytd_budget, self.income.ytd_budget),
        }
    }
}
