//! Display formatting for statement cells.

use chrono::Month;
use rust_decimal::{Decimal, RoundingStrategy};

/// Magnitudes below this are treated as zero.
pub const EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Placeholder for empty cells.
pub const DASH: &str = "-";

/// Returns true if `value` is within [`EPSILON`] of zero.
#[must_use]
pub fn is_negligible(value: Decimal) -> bool {
    value.abs() < EPSILON
}

/// Formats an amount as a rounded, thousands-grouped integer.
///
/// Negative amounts are parenthesized: `-1234.7` → `"(1,235)"`. Negligible
/// amounts render as `"-"`.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    if is_negligible(value) {
        return DASH.to_string();
    }
    let rounded = value
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc();
    let grouped = group_thousands(&rounded.to_string());
    if value.is_sign_negative() {
        format!("({grouped})")
    } else {
        grouped
    }
}

/// Formats a percentage with one decimal: `12.34` → `"12.3%"`.
///
/// Missing or negligible values render as `"-"`.
#[must_use]
pub fn format_percent(value: Option<Decimal>) -> String {
    match value {
        Some(v) if !is_negligible(v) => {
            let rounded = v.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.1}%")
        }
        _ => DASH.to_string(),
    }
}

/// Formats `value` as a percentage of `denominator`.
///
/// A negligible denominator renders as `"-"` whatever the numerator.
#[must_use]
pub fn percent_of(value: Decimal, denominator: Decimal) -> String {
    if is_negligible(denominator) {
        return DASH.to_string();
    }
    let ratio = value
        .checked_div(denominator)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED));
    format_percent(ratio)
}

/// Turns an ISO date prefix into `"Mon - YYYY"`: `"2024-03-01"` → `"Mar - 2024"`.
///
/// Only the first ten characters are read. Anything unparseable is returned
/// unchanged.
#[must_use]
pub fn format_month_label(iso: &str) -> String {
    let head: String = iso.chars().take(10).collect();
    let mut parts = head.split('-');
    let (Some(year), Some(month)) = (parts.next(), parts.next()) else {
        return iso.to_string();
    };
    if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
        return iso.to_string();
    }
    match month.parse::<u8>().ok().and_then(|m| Month::try_from(m).ok()) {
        Some(m) => format!("{} - {year}", &m.name()[..3]),
        None => iso.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
