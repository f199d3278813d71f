//! Lenient field decoding for backend documents.
//!
//! The backend stores orders as loosely typed documents: prices arrive as
//! numbers or as strings, quantities occasionally as floats, and some records
//! lack fields altogether. A single malformed record must not fail the whole
//! collection, so these helpers decode such fields into `Option`s where
//! `None` means "missing or not numeric".
//!
//! Use with `#[serde(default, deserialize_with = "...")]`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

/// Decode a string or number into its string form.
///
/// Backend identifiers are usually strings but older records carry numbers.
///
/// # Errors
///
/// Fails for any JSON type other than a string or number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

/// Decode free text, treating `null` and non-scalar values as absent.
///
/// # Errors
///
/// Only fails if the input is not valid JSON.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Decode a decimal amount from a number or a numeric string.
///
/// Numbers outside the range of [`Decimal`] (about ±7.9e28), such as `1e30`,
/// are treated as absent like non-numeric values, so they count as zero
/// toward earnings.
///
/// # Errors
///
/// Only fails if the input is not valid JSON.
pub fn decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| decimal_from_value(&value))
}

/// Decode a non-negative whole quantity from a number or numeric string.
///
/// Fractional quantities are truncated toward zero. Negative values are
/// treated as absent.
///
/// # Errors
///
/// Only fails if the input is not valid JSON.
pub fn quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| quantity_from_value(&value))
}

/// Decode a timestamp from an RFC 3339 string, a `YYYY-MM-DD` date (midnight
/// UTC) or epoch milliseconds.
///
/// # Errors
///
/// Only fails if the input is not valid JSON.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| timestamp_from_value(&value))
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    s.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

fn quantity_from_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|q| u32::try_from(q).ok())
            .or_else(|| n.as_f64().and_then(truncate_quantity)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u32>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate_quantity))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // range checked above
fn truncate_quantity(q: f64) -> Option<u32> {
    (q.is_finite() && q >= 0.0 && q <= f64::from(u32::MAX)).then(|| q.trunc() as u32)
}

fn timestamp_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s.trim()),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}
