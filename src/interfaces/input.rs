use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses user-typed text into a number.
///
/// Thousands separators (`,`) and spaces are stripped first. Empty or
/// unparseable text yields `None`, which leaves the field unbound.
pub fn sanitize(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != ' ').collect();
    if cleaned.is_empty() {
        return None;
    }
    let parsed = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok();
    if parsed.is_none() {
        tracing::debug!(raw, "discarded unparseable input");
    }
    parsed
}
