//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::{Decimal, RoundingStrategy};

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats an amount as rupees with two decimal places.
///
/// Non-numeric input is shown as zero.
///
/// Usage in templates: `{{ metrics.total_earnings|rupees }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn rupees(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_rupees(&value.to_string()))
}

fn format_rupees(value: &str) -> String {
    let amount = value
        .trim()
        .parse::<Decimal>()
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("₹{amount:.2}")
}
