//! Currency formatting and parsing
//!
//! Prices are entered as free text and displayed as US-style currency
//! (`$1,234.50`). Parsing tolerates the same decorations that formatting
//! produces, so a formatted value prefilled into a form field parses back.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum PriceParseError {
    #[error("price is empty or missing")]
    Empty,

    #[error("'{0}' is not a valid price")]
    Invalid(String),
}

/// Round a currency amount to whole cents.
///
/// Invariant comparisons (price vs. parts cost) happen in cents so that
/// accumulated float error below half a cent cannot flip a check.
pub fn cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Format an amount as US-style currency with thousands separators
pub fn format_price(amount: f64) -> String {
    let total = cents(amount);
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();

    let dollars = (total / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", sign, grouped, total % 100)
}

/// Parse a currency string, accepting a leading `$` and thousands separators
pub fn parse_price(input: &str) -> Result<f64, PriceParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PriceParseError::Empty);
    }

    let bare = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");
    let value: f64 = bare
        .parse()
        .map_err(|_| PriceParseError::Invalid(input.to_string()))?;

    if !value.is_finite() {
        return Err(PriceParseError::Invalid(input.to_string()));
    }

    Ok(value)
}
