//! End-to-end statement generation from JSON inputs.

use serde_json::json;
use tally_core::reports::{ReportRow, NO_DATA_TEXT};
use tally_core::{ReportJob, ReportRequest, ReportService};

fn district_request() -> serde_json::Value {
    json!({
        "monthData": {
            "Account": ["Patient Revenue", "Other Revenue", "Salaries", "Benefits", "Rent", "Depreciation", "Patient Revenue"],
            "Value": [12000, "500", 5000.5, null, 1500, 800, 11000],
            "Scenario": ["Actuals", "Actuals", "Actuals", "Actuals", "Actuals", "Actuals", "Budget"]
        },
        "ytdData": {
            "Account": ["Patient Revenue", "Salaries", "Benefits"],
            "Value": [36000, 15000, 2000],
            "Scenario": ["Actuals", "Actuals", "Actuals"]
        },
        "titleLabel": "Monthly P&L",
        "meta": {
            "typeLabel": "District",
            "entityName": "North",
            "monthLabel": "2024-03-01T00:00:00.000Z",
            "facilityCount": 6,
            "plType": "Operational"
        },
        "accountConfig": {
            "Income": {},
            "Patient Revenue": { "parent": "Income" },
            "Other Revenue": { "parent": "Income" },
            "Expenses": { "doubleLines": true },
            "Personnel": { "parent": "Expenses", "displayExcluded": true },
            "Salaries": { "parent": "Personnel" },
            "Benefits": { "parent": "Personnel" },
            "Rent": { "parent": "Expenses" },
            "Depreciation": { "parent": "Expenses", "operationalExcluded": true }
        },
        "sectionConfig": {
            "Revenue": ["Income"],
            "Expenses": ["Expenses"]
        }
    })
}

fn account_labels(rows: &[ReportRow]) -> Vec<(String, u32)> {
    rows.iter()
        .filter_map(ReportRow::as_account)
        .map(|r| (r.label.clone(), r.depth))
        .collect()
}

#[test]
fn test_district_statement_from_json() {
    let request: ReportRequest = serde_json::from_value(district_request()).unwrap();
    let outcome = ReportService::generate(&request).unwrap();
    assert!(!outcome.no_revenue);
    let doc = outcome.document.unwrap();

    let header: Vec<&str> = doc.header.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        header,
        vec![
            "Monthly P&L - North",
            "Actual vs Budget",
            "Mar - 2024",
            "Facilities: 6",
            "Type: District",
        ]
    );

    assert_eq!(
        doc.sections[0].rows[0],
        ReportRow::SectionHeader { label: "Revenue".to_string() }
    );
    assert_eq!(
        account_labels(&doc.sections[0].rows),
        vec![
            ("Patient Revenue".to_string(), 2),
            ("Other Revenue".to_string(), 2),
            ("Income".to_string(), 1),
        ]
    );

    // Personnel is hidden (children promoted), Depreciation is operationally excluded.
    assert_eq!(
        account_labels(&doc.sections[1].rows),
        vec![
            ("Salaries".to_string(), 2),
            ("Benefits".to_string(), 2),
            ("Rent".to_string(), 2),
            ("Expenses".to_string(), 1),
        ]
    );

    let expenses = doc.account_rows().find(|r| r.label == "Expenses").unwrap();
    assert_eq!(expenses.values.month_actual, "6,501");
    assert_eq!(expenses.percents.month_actual, "52.0%");
    assert!(expenses.double_lines);
    assert!(expenses.bold);

    let income = doc.account_rows().find(|r| r.label == "Income").unwrap();
    assert_eq!(income.values.month_actual, "12,500");
    assert_eq!(income.values.month_budget, "11,000");
    assert_eq!(income.values.month_variance, "1,500");
}

#[test]
fn test_missing_value_column_yields_placeholder() {
    let mut value = district_request();
    value["monthData"].as_object_mut().unwrap().remove("Value");
    value["meta"]["typeLabel"] = json!("Facility");

    let request: ReportRequest = serde_json::from_value(value).unwrap();
    let outcome = ReportService::generate(&request).unwrap();
    assert!(outcome.no_revenue);
    let doc = outcome.document.unwrap();
    assert_eq!(
        doc.sections[0].rows,
        vec![ReportRow::Placeholder { text: NO_DATA_TEXT.to_string() }]
    );
}

#[test]
fn test_facility_suppression_serializes_without_document() {
    let mut value = district_request();
    value["meta"]["typeLabel"] = json!("Facility");
    value["monthData"]["Scenario"] = json!(["Budget", "Budget", "Actuals", "Actuals", "Actuals", "Actuals", "Budget"]);

    let request: ReportRequest = serde_json::from_value(value).unwrap();
    let outcome = ReportService::generate(&request).unwrap();
    assert_eq!(serde_json::to_value(&outcome).unwrap(), json!({ "noRevenue": true }));
}

#[test]
fn test_batch_jobs_from_json() {
    let jobs: Vec<ReportJob> = serde_json::from_value(json!([
        { "name": "north", "request": district_request() },
        { "name": "empty", "request": {} }
    ]))
    .unwrap();

    let results = ReportService::generate_batch(&jobs);
    assert_eq!(results[0].name, "north");
    assert!(results[0].result.as_ref().unwrap().document.is_some());

    // No month data and no entity type: placeholder document, empty header.
    let empty = results[1].result.as_ref().unwrap();
    assert!(!empty.no_revenue);
    assert!(empty.document.as_ref().unwrap().header.is_empty());
}
