//! Money display and parsing.
//!
//! Worksheet computations stay unrounded; this module owns the lossy display
//! convention: round half-up to whole euros, thousands separators, no decimal
//! places. Formatting is idempotent over its own output; it is not expected
//! to round-trip unrounded amounts.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_half_up;

/// Error returned when a string cannot be parsed as a money amount.
#[derive(Debug, Error)]
#[error("invalid money amount '{input}': {source}")]
pub struct ParseMoneyError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Formats an amount rounded to whole units with thousands separators, e.g.
/// `12,346`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats with the euro symbol, e.g. `€12,346`.
pub fn format_money_eur(amount: Decimal) -> String {
    let formatted = format_money(amount);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-€{rest}"),
        None => format!("€{formatted}"),
    }
}

/// Parses user-entered money text.
///
/// Accepts comma thousands separators, an optional leading `€`, and
/// surrounding whitespace (e.g. `" €1,234.56 "`).
pub fn parse_money(s: &str) -> Result<Decimal, ParseMoneyError> {
    let normalized = s.trim().trim_start_matches('€').replace(',', "");
    normalized.parse().map_err(|e| ParseMoneyError {
        input: s.to_string(),
        source: e,
    })
}
