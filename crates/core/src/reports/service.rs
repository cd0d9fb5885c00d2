//! Report generation service.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::ReportError;
use super::format::is_negligible;
use super::header::build_header;
use super::render::SectionRenderer;
use super::totals::StatementTotals;
use super::types::{EntityMeta, EntityType, ReportDocument, ReportOutcome};
use crate::hierarchy::{AccountConfig, HierarchyIndex, SectionConfig};
use crate::ledger::LedgerTable;

/// Everything needed to render one statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// Ledger table for the reporting month.
    #[serde(default)]
    pub month_data: LedgerTable,
    /// Ledger table for the year to date.
    #[serde(default)]
    pub ytd_data: LedgerTable,
    /// Title prefix.
    #[serde(default)]
    pub title_label: String,
    /// Entity description.
    #[serde(default)]
    pub meta: EntityMeta,
    /// Account hierarchy.
    #[serde(default)]
    pub account_config: AccountConfig,
    /// Section layout.
    #[serde(default)]
    pub section_config: SectionConfig,
}

/// Service for generating P&L statements.
pub struct ReportService;

impl ReportService {
    /// Generates the statement described by `request`.
    ///
    /// Gates are applied in order:
    /// 1. A month table without account or value column yields a header and
    ///    a "No data" placeholder; facilities are flagged as having no revenue.
    /// 2. A facility whose month-actual income is negligible is suppressed
    ///    entirely.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Config`] if the account hierarchy is cyclic.
    pub fn generate(request: &ReportRequest) -> Result<ReportOutcome, ReportError> {
        let meta = &request.meta;
        let is_facility = meta.type_label == Some(EntityType::Facility);
        let header = build_header(&request.title_label, meta);

        if !request.month_data.has_columns() {
            debug!(entity = %meta.entity_name, "Month data has no account or value column");
            return Ok(ReportOutcome {
                no_revenue: is_facility,
                document: Some(ReportDocument::no_data(header)),
            });
        }

        let operational = meta.pl_type.is_operational();
        let index = HierarchyIndex::build(&request.account_config);
        let totals = StatementTotals::compute(
            &request.month_data,
            &request.ytd_data,
            &request.account_config,
            &index,
            operational,
        )?;

        if is_facility && is_negligible(totals.income().month_actual) {
            info!(entity = %meta.entity_name, "Facility has no month revenue, report suppressed");
            return Ok(ReportOutcome::suppressed());
        }

        let sections = SectionRenderer::new(
            &request.account_config,
            &request.section_config,
            &index,
            &totals,
            operational,
        )
        .render();

        debug!(
            entity = %meta.entity_name,
            sections = sections.len(),
            "Report rendered"
        );
        Ok(ReportOutcome::rendered(ReportDocument { header, sections }))
    }
}
