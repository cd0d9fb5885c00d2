//! Entity-specific report headers.

use rust_decimal::Decimal;

use super::format::format_month_label;
use super::types::{EntityMeta, EntityType, HeaderLine};

/// Subtitle of consolidated (multi-entity) reports.
pub const SUBTITLE: &str = "Actual vs Budget";

/// Builds the header block for `meta`.
///
/// The first line is the bold title. Reports for an unknown entity type get
/// an empty header.
#[must_use]
pub fn build_header(title_label: &str, meta: &EntityMeta) -> Vec<HeaderLine> {
    let Some(entity_type) = meta.type_label else {
        return Vec::new();
    };

    let title = HeaderLine::bold(title(title_label, &meta.entity_name));
    let month = HeaderLine::plain(format_month_label(&meta.month_label));
    let mut lines = vec![title];

    match entity_type {
        EntityType::Facility => {
            lines.push(month);
            lines.push(HeaderLine::plain("Type: Facility"));
            lines.push(HeaderLine::plain(format!(
                "District: {}",
                meta.district_name.as_deref().unwrap_or_default()
            )));
            push_census(&mut lines, meta);
            if let Some(start) = meta.start_date_est.as_deref().filter(|s| !s.trim().is_empty()) {
                lines.push(HeaderLine::plain(format!("Start Date: {start}")));
            }
        }
        EntityType::Subsidiary | EntityType::Region => {
            lines.push(HeaderLine::plain(SUBTITLE));
            lines.push(month);
            lines.push(count_line("Districts", meta.district_count));
            lines.push(count_line("Facilities", meta.facility_count));
        }
        EntityType::District => {
            lines.push(HeaderLine::plain(SUBTITLE));
            lines.push(month);
            lines.push(count_line("Facilities", meta.facility_count));
            lines.push(HeaderLine::plain("Type: District"));
            push_census(&mut lines, meta);
        }
    }
    lines
}

fn title(title_label: &str, entity_name: &str) -> String {
    let name = entity_name.trim();
    if name.is_empty() {
        title_label.to_string()
    } else {
        format!("{title_label} - {name}")
    }
}

fn count_line(label: &str, count: Option<u32>) -> HeaderLine {
    HeaderLine::plain(format!("{label}: {}", count.unwrap_or(0)))
}

fn push_census(lines: &mut Vec<HeaderLine>, meta: &EntityMeta) {
    if let Some(actual) = meta.census_actual {
        lines.push(HeaderLine::plain(format!("Census Actual: {}", census(actual))));
    }
    if let Some(budget) = meta.census_budget {
        lines.push(HeaderLine::plain(format!("Census Budget: {}", census(budget))));
    }
}

fn census(value: Decimal) -> Decimal {
    value.round_dp(1).normalize()
}
