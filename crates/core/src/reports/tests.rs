//! Property-based and scenario tests for the reports module.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_shared::{AccountId, Scenario};

use super::batch::ReportJob;
use super::error::ReportError;
use super::format::{percent_of, DASH};
use super::service::{ReportRequest, ReportService};
use super::types::{EntityMeta, EntityType, PlType, ReportOutcome, ReportRow, NO_DATA_TEXT};
use crate::hierarchy::{AccountConfig, AccountSettings, ConfigError, Section, SectionConfig};
use crate::ledger::{LedgerRow, LedgerTable};

fn id(name: &str) -> AccountId {
    AccountId::new(name).unwrap()
}

fn row(account: &str, scenario: Scenario, value: Decimal) -> LedgerRow {
    LedgerRow::new(id(account), scenario, value)
}

fn hierarchy() -> AccountConfig {
    [
        (id("Income"), AccountSettings::default()),
        (id("Patient Revenue"), AccountSettings::default().with_parent(id("Income"))),
        (id("Expenses"), AccountSettings::default()),
        (id("Salaries"), AccountSettings::default().with_parent(id("Expenses"))),
        (id("Supplies"), AccountSettings::default().with_parent(id("Expenses"))),
    ]
    .into_iter()
    .collect()
}

fn layout() -> SectionConfig {
    SectionConfig::new(vec![
        Section::new("Revenue", vec![id("Income")]),
        Section::new("Operating Expenses", vec![id("Expenses")]),
    ])
}

fn request(entity_type: EntityType, month: Vec<LedgerRow>, ytd: Vec<LedgerRow>) -> ReportRequest {
    ReportRequest {
        month_data: LedgerTable::from_rows(&month),
        ytd_data: LedgerTable::from_rows(&ytd),
        title_label: "Monthly P&L".to_string(),
        meta: EntityMeta {
            type_label: Some(entity_type),
            entity_name: "Oak Grove".to_string(),
            month_label: "2024-03-01".to_string(),
            ..EntityMeta::default()
        },
        account_config: hierarchy(),
        section_config: layout(),
    }
}

proptest! {
    /// A zero income denominator always renders a dash.
    #[test]
    fn test_zero_income_guard(numerator in any::<i64>(), scale in 0u32..6) {
        let value = Decimal::new(numerator, scale);
        prop_assert_eq!(percent_of(value, Decimal::ZERO), DASH);
    }

    /// A facility without month revenue is suppressed whatever its budget
    /// and YTD figures.
    #[test]
    fn test_facility_without_revenue_suppressed(
        budget in 0i64..1_000_000_000,
        ytd in 0i64..1_000_000_000,
        expenses in 1i64..1_000_000,
    ) {
        let req = request(
            EntityType::Facility,
            vec![
                row("Patient Revenue", Scenario::Budget, Decimal::from(budget)),
                row("Salaries", Scenario::Actuals, Decimal::from(expenses)),
            ],
            vec![row("Patient Revenue", Scenario::Actuals, Decimal::from(ytd))],
        );

        let outcome = ReportService::generate(&req).unwrap();
        prop_assert_eq!(outcome, ReportOutcome::suppressed());
    }
}

#[test]
fn test_full_statement() {
    let req = request(
        EntityType::District,
        vec![
            row("Patient Revenue", Scenario::Actuals, dec!(10000)),
            row("Patient Revenue", Scenario::Budget, dec!(9000)),
            row("Salaries", Scenario::Actuals, dec!(4000)),
            row("Supplies", Scenario::Actuals, dec!(1000.4)),
            row("Salaries", Scenario::Budget, dec!(3500)),
        ],
        vec![
            row("Patient Revenue", Scenario::Actuals, dec!(30000)),
            row("Salaries", Scenario::Actuals, dec!(12000)),
        ],
    );

    let outcome = ReportService::generate(&req).unwrap();
    assert!(!outcome.no_revenue);
    let doc = outcome.document.unwrap();
    assert_eq!(doc.header[0].text, "Monthly P&L - Oak Grove");
    assert_eq!(doc.sections.len(), 2);

    let expense_rows: Vec<(&str, u32, bool)> = doc.sections[1]
        .rows
        .iter()
        .filter_map(ReportRow::as_account)
        .map(|r| (r.label.as_str(), r.depth, r.bold))
        .collect();
    assert_eq!(
        expense_rows,
        vec![("Salaries", 2, false), ("Supplies", 2, false), ("Expenses", 1, true)]
    );

    let expenses = doc.account_rows().find(|r| r.label == "Expenses").unwrap();
    assert_eq!(expenses.values.month_actual, "5,000");
    assert_eq!(expenses.values.month_budget, "3,500");
    assert_eq!(expenses.values.month_variance, "1,500");
    assert_eq!(expenses.values.ytd_actual, "12,000");
    assert_eq!(expenses.values.ytd_budget, "-");
    assert_eq!(expenses.percents.month_actual, "50.0%");
    assert_eq!(expenses.percents.month_budget, "38.9%");
    assert_eq!(expenses.percents.ytd_actual, "40.0%");
    assert_eq!(expenses.percents.ytd_budget, "-");

    let income = doc.account_rows().find(|r| r.label == "Income").unwrap();
    assert_eq!(income.percents.month_actual, "100.0%");
}

#[test]
fn test_oversized_amounts_saturate_instead_of_failing() {
    let huge: Decimal = "79000000000000000000000000000".parse().unwrap();
    let req = request(
        EntityType::District,
        vec![
            row("Patient Revenue", Scenario::Actuals, huge),
            row("Patient Revenue", Scenario::Actuals, huge),
        ],
        Vec::new(),
    );

    let doc = ReportService::generate(&req).unwrap().document.unwrap();
    let income = doc.account_rows().find(|r| r.label == "Income").unwrap();
    assert_eq!(income.amounts.month_actual, Decimal::MAX);
    assert_eq!(income.percents.month_actual, "100.0%");
}

#[test]
fn test_facility_with_revenue_renders() {
    let req = request(
        EntityType::Facility,
        vec![row("Patient Revenue", Scenario::Actuals, dec!(0.01))],
        Vec::new(),
    );
    let outcome = ReportService::generate(&req).unwrap();
    assert!(!outcome.no_revenue);
    assert!(outcome.document.is_some());
}

#[test]
fn test_no_revenue_gate_only_for_facilities() {
    let req = request(
        EntityType::Region,
        vec![row("Salaries", Scenario::Actuals, dec!(10))],
        Vec::new(),
    );
    let outcome = ReportService::generate(&req).unwrap();
    assert!(!outcome.no_revenue);
    assert!(outcome.document.is_some());
}

#[test]
fn test_no_data_gate() {
    for (entity_type, flagged) in [(EntityType::Facility, true), (EntityType::District, false)] {
        let mut req = request(entity_type, Vec::new(), Vec::new());
        req.month_data = LedgerTable::default();

        let outcome = ReportService::generate(&req).unwrap();
        assert_eq!(outcome.no_revenue, flagged);
        let doc = outcome.document.unwrap();
        assert!(!doc.header.is_empty());
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(
            doc.sections[0].rows,
            vec![ReportRow::Placeholder { text: NO_DATA_TEXT.to_string() }]
        );
    }
}

#[test]
fn test_no_data_gate_runs_before_cycle_check() {
    let mut req = request(EntityType::Region, Vec::new(), Vec::new());
    req.month_data = LedgerTable::default();
    req.account_config.insert(id("Income"), AccountSettings::default().with_parent(id("Income")));
    assert!(ReportService::generate(&req).is_ok());
}

#[test]
fn test_cycle_surfaces_as_error() {
    let mut req = request(
        EntityType::Region,
        vec![row("Salaries", Scenario::Actuals, dec!(1))],
        Vec::new(),
    );
    req.account_config.insert(id("Income"), AccountSettings::default().with_parent(id("Patient Revenue")));

    let err = ReportService::generate(&req).unwrap_err();
    assert!(matches!(err, ReportError::Config(ConfigError::Cycle { .. })));
    assert!(err.to_string().contains("cycle"));
}

#[test]
fn test_operational_report_drops_excluded_accounts() {
    let mut req = request(
        EntityType::District,
        vec![
            row("Patient Revenue", Scenario::Actuals, dec!(1000)),
            row("Salaries", Scenario::Actuals, dec!(300)),
            row("Supplies", Scenario::Actuals, dec!(200)),
        ],
        Vec::new(),
    );
    req.meta.pl_type = PlType::Operational;
    req.account_config.insert(
        id("Supplies"),
        AccountSettings::default().with_parent(id("Expenses")).excluded_from_operations(),
    );

    let doc = ReportService::generate(&req).unwrap().document.unwrap();
    assert!(doc.account_rows().all(|r| r.label != "Supplies"));
    let expenses = doc.account_rows().find(|r| r.label == "Expenses").unwrap();
    assert_eq!(expenses.amounts.month_actual, dec!(300));
}

#[test]
fn test_batch_preserves_order() {
    let jobs: Vec<ReportJob> = (0..16)
        .map(|i| {
            let mut req = request(
                EntityType::District,
                vec![row("Patient Revenue", Scenario::Actuals, Decimal::from(i + 1))],
                Vec::new(),
            );
            if i == 5 {
                req.account_config.insert(id("Income"), AccountSettings::default().with_parent(id("Income")));
            }
            ReportJob {
                name: format!("district-{i}"),
                request: req,
            }
        })
        .collect();

    let results = ReportService::generate_batch(&jobs);
    assert_eq!(results.len(), 16);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.name, format!("district-{i}"));
        assert_eq!(result.result.is_err(), i == 5);
    }

    let third = results[2].result.as_ref().unwrap().document.as_ref().unwrap();
    let income = third.account_rows().find(|r| r.label == "Income").unwrap();
    assert_eq!(income.amounts.month_actual, dec!(3));
}
