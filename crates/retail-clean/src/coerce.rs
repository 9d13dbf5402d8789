//! Scalar type coercion with defined fallbacks.
//!
//! `None` stands in for the "unknown" sentinel: a missing, empty, or
//! unparseable input always coerces to `None`, never to an error.

/// Bounds `value` to the inclusive range `[low, high]`.
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Keeps digits, decimal points, and a leading minus sign.
///
/// "25 years" becomes "25", "$1,299.99" becomes "1299.99". The minus sign is
/// only kept at the head of the trimmed input so negative values survive
/// without turning interior dashes into signs.
fn strip_non_numeric(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    for (idx, ch) in trimmed.char_indices() {
        if ch.is_ascii_digit() || ch == '.' || (ch == '-' && idx == 0) {
            out.push(ch);
        }
    }
    out
}

/// Coerces a raw value to a float.
///
/// A clean numeric string parses directly; otherwise everything but digits,
/// decimal points, and a leading sign is stripped first. Returns `None` when
/// the input is missing, empty, or still unparseable after stripping.
pub fn coerce_numeric(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(value) = raw.parse::<f64>() {
        if value.is_finite() {
            return Some(value);
        }
        return None;
    }
    let stripped = strip_non_numeric(raw);
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerces a raw value to an integer, truncating toward zero.
///
/// When `minimum` is given the result is floored to it, so
/// `coerce_integer(Some("-3"), Some(1))` yields `Some(1)`.
pub fn coerce_integer(raw: Option<&str>, minimum: Option<i64>) -> Option<i64> {
    let value = coerce_numeric(raw)?.trunc() as i64;
    Some(match minimum {
        Some(min) if value < min => min,
        _ => value,
    })
}
