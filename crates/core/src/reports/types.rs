//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tally_shared::AccountId;
use thiserror::Error;

/// Text of the placeholder row in reports without data.
pub const NO_DATA_TEXT: &str = "No data";

/// Error returned when an entity type or P&L type label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownLabel {
    /// What was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownLabel {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Kind of entity a report is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// A single facility.
    Facility,
    /// A subsidiary spanning districts.
    Subsidiary,
    /// A region spanning districts.
    Region,
    /// A district spanning facilities.
    District,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Facility => write!(f, "Facility"),
            Self::Subsidiary => write!(f, "Subsidiary"),
            Self::Region => write!(f, "Region"),
            Self::District => write!(f, "District"),
        }
    }
}

impl std::str::FromStr for EntityType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facility" => Ok(Self::Facility),
            "subsidiary" => Ok(Self::Subsidiary),
            "region" => Ok(Self::Region),
            "district" => Ok(Self::District),
            _ => Err(UnknownLabel::new("entity type", s)),
        }
    }
}

/// Profit-and-loss flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlType {
    /// Operational P&L: operationally excluded accounts are hidden and left
    /// out of their parents' totals.
    Operational,
    /// Standard P&L.
    #[default]
    Standard,
}

impl PlType {
    /// Returns true for operational reports.
    #[must_use]
    pub const fn is_operational(self) -> bool {
        matches!(self, Self::Operational)
    }
}

impl std::str::FromStr for PlType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "operational" => Ok(Self::Operational),
            "standard" => Ok(Self::Standard),
            _ => Err(UnknownLabel::new("P&L type", s)),
        }
    }
}

/// Descriptive fields of the entity a report covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityMeta {
    /// Entity kind; unknown labels read as `None`.
    #[serde(deserialize_with = "lenient_entity_type")]
    pub type_label: Option<EntityType>,
    /// Display name of the entity.
    pub entity_name: String,
    /// Reporting month as an ISO date (`YYYY-MM-DD...`).
    pub month_label: String,
    /// District a facility belongs to.
    pub district_name: Option<String>,
    /// Number of districts.
    pub district_count: Option<u32>,
    /// Number of facilities.
    pub facility_count: Option<u32>,
    /// Actual census.
    pub census_actual: Option<Decimal>,
    /// Budgeted census.
    pub census_budget: Option<Decimal>,
    /// Estimated start date.
    pub start_date_est: Option<String>,
    /// Operational or standard P&L.
    #[serde(deserialize_with = "lenient_pl_type")]
    pub pl_type: PlType,
}

fn lenient_entity_type<'de, D>(deserializer: D) -> Result<Option<EntityType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

fn lenient_pl_type<'de, D>(deserializer: D) -> Result<PlType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
}

/// The four figures tracked for every account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodFigures {
    /// Month, actuals.
    pub month_actual: Decimal,
    /// Month, budget.
    pub month_budget: Decimal,
    /// Year to date, actuals.
    pub ytd_actual: Decimal,
    /// Year to date, budget.
    pub ytd_budget: Decimal,
}

impl PeriodFigures {
    /// Month actual minus month budget.
    #[must_use]
    pub fn month_variance(&self) -> Decimal {
        self.month_actual.saturating_sub(self.month_budget)
    }

    /// YTD actual minus YTD budget.
    #[must_use]
    pub fn ytd_variance(&self) -> Decimal {
        self.ytd_actual.saturating_sub(self.ytd_budget)
    }

    /// Month actual plus YTD actual, the activity measure used for zero
    /// suppression. Budget figures are deliberately not part of it.
    #[must_use]
    pub fn actual_activity(&self) -> Decimal {
        self.month_actual.saturating_add(self.ytd_actual)
    }
}

/// A header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLine {
    /// Line text.
    pub text: String,
    /// Rendered in bold.
    pub bold: bool,
}

impl HeaderLine {
    /// Creates a regular header line.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Creates a bold header line.
    #[must_use]
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Formatted amount columns of an account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowValues {
    /// Month, actuals.
    pub month_actual: String,
    /// Month, budget.
    pub month_budget: String,
    /// Month, actual minus budget.
    pub month_variance: String,
    /// Year to date, actuals.
    pub ytd_actual: String,
    /// Year to date, budget.
    pub ytd_budget: String,
    /// Year to date, actual minus budget.
    pub ytd_variance: String,
}

/// Formatted percent-of-income columns of an account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowPercents {
    /// Month actual over month actual income.
    pub month_actual: String,
    /// Month budget over month budget income.
    pub month_budget: String,
    /// YTD actual over YTD actual income.
    pub ytd_actual: String,
    /// YTD budget over YTD budget income.
    pub ytd_budget: String,
}

/// A rendered account line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRow {
    /// Account identifier.
    pub account: AccountId,
    /// Display label.
    pub label: String,
    /// Indentation level; top-level accounts sit at depth 1.
    pub depth: u32,
    /// Unformatted rolled figures.
    pub amounts: PeriodFigures,
    /// Formatted amounts.
    pub values: RowValues,
    /// Formatted percentages of income.
    pub percents: RowPercents,
    /// Rendered in bold (subtotal or top-level line).
    pub bold: bool,
    /// Numeric cells carry a double border. Label and spacer cells never do.
    pub double_lines: bool,
}

/// A row of a section block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportRow {
    /// Section title row.
    SectionHeader {
        /// Section name.
        label: String,
    },
    /// Account line.
    Account(AccountRow),
    /// Free-text placeholder.
    Placeholder {
        /// Placeholder text.
        text: String,
    },
}

impl ReportRow {
    /// Returns the account row, if this is one.
    #[must_use]
    pub const fn as_account(&self) -> Option<&AccountRow> {
        match self {
            Self::Account(row) => Some(row),
            _ => None,
        }
    }
}

/// Rows rendered for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    /// Section name.
    pub name: String,
    /// Rows in display order, starting with the section header.
    pub rows: Vec<ReportRow>,
}

/// Rendered statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Header lines.
    pub header: Vec<HeaderLine>,
    /// Section blocks in layout order.
    pub sections: Vec<SectionBlock>,
}

impl ReportDocument {
    /// Header followed by a single "No data" placeholder.
    #[must_use]
    pub fn no_data(header: Vec<HeaderLine>) -> Self {
        Self {
            header,
            sections: vec![SectionBlock {
                name: String::new(),
                rows: vec![ReportRow::Placeholder {
                    text: NO_DATA_TEXT.to_string(),
                }],
            }],
        }
    }

    /// Iterates over every account row across all sections.
    pub fn account_rows(&self) -> impl Iterator<Item = &AccountRow> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .filter_map(ReportRow::as_account)
    }
}

/// Result of a report generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutcome {
    /// True when the entity has no revenue worth reporting.
    pub no_revenue: bool,
    /// Rendered document; absent for suppressed reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<ReportDocument>,
}

impl ReportOutcome {
    /// A report suppressed for lack of revenue.
    #[must_use]
    pub const fn suppressed() -> Self {
        Self {
            no_revenue: true,
            document: None,
        }
    }

    /// A report with a document.
    #[must_use]
    pub const fn rendered(document: ReportDocument) -> Self {
        Self {
            no_revenue: false,
            document: Some(document),
        }
    }
}
