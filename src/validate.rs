//! Argument predicates for the cluster count and the iteration cap.
//!
//! Both accept any numeric spelling whose value is a whole number
//! (`"3"`, `"3.0"`, `"3e0"`, `"1_0"`) and reject everything else.

use crate::config::MAX_ITERS_LIMIT;
use crate::error::ValidationError;

/// Parse a decimal number, ignoring surrounding whitespace.
///
/// A single `_` is allowed between two digits as a separator (`"1_000"`);
/// any other underscore makes the text invalid.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    if !text.contains('_') {
        return text.parse().ok();
    }

    let bytes = text.as_bytes();
    let mut digits = String::with_capacity(text.len());
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let before = i > 0 && bytes[i - 1].is_ascii_digit();
            let after = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            if !(before && after) {
                return None;
            }
        } else {
            digits.push(b as char);
        }
    }
    digits.parse().ok()
}

/// Parse a raw argument as a number.
pub fn parse_number(raw: &str) -> Result<f64, ValidationError> {
    parse_decimal(raw).ok_or_else(|| ValidationError::NotANumber(raw.to_string()))
}

/// True for finite values without a fractional part
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// True when `low < value < high`
pub fn in_open_range(value: f64, low: f64, high: f64) -> bool {
    low < value && value < high
}

fn whole_number_between(raw: &str, low: f64, high: f64) -> Result<usize, ValidationError> {
    let value = parse_number(raw)?;
    if !is_integral(value) {
        return Err(ValidationError::NotIntegral(value));
    }
    if !in_open_range(value, low, high) {
        return Err(ValidationError::OutOfRange { value, low, high });
    }
    Ok(value as usize)
}

/// Validate the cluster count against the number of loaded points:
/// `1 < k < n_points`.
pub fn validate_k(raw: &str, n_points: usize) -> Result<usize, ValidationError> {
    whole_number_between(raw, 1.0, n_points as f64)
}

/// Validate the iteration cap: `1 < iter < 1000`.
pub fn validate_max_iters(raw: &str) -> Result<usize, ValidationError> {
    whole_number_between(raw, 1.0, MAX_ITERS_LIMIT as f64)
}
