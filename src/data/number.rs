//! Text → number conversions used by the two ingestion paths.
//!
//! - [`parse_float`] is the lenient prefix parser for manual entry fields.
//! - [`infer_cell`] is the dynamic typing applied to every CSV cell.

use super::point::Value;

/// Parse the longest numeric prefix of `text`, after leading whitespace.
///
/// Accepts `[+-]?(digits[.digits]|.digits)([eE][+-]?digits)?` and `[+-]?Infinity`.
/// Returns NaN when no prefix qualifies, so `"12abc"` is 12 and `"abc"` is NaN.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// Strict variant: `Some` only when the whole (trimmed) text is a number.
pub fn parse_number_strict(text: &str) -> Option<f64> {
    let t = text.trim();
    if is_plain_decimal(t) {
        t.parse::<f64>().ok().filter(|v| v.is_finite())
    } else {
        None
    }
}

/// Largest magnitude a CSV cell may have and still be typed as a number (2^53).
pub const MAX_INFERRED_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

/// Dynamic typing for a CSV cell. Numbers at or beyond ±2^53 stay text.
pub fn infer_cell(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Missing;
    }
    match raw {
        "true" | "TRUE" => return Value::Bool(true),
        "false" | "FALSE" => return Value::Bool(false),
        _ => {}
    }
    match parse_number_strict(raw) {
        Some(v) if v.abs() < MAX_INFERRED_MAGNITUDE => Value::Number(v),
        _ => Value::Text(raw.to_string()),
    }
}

/// `-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?`
fn is_plain_decimal(t: &str) -> bool {
    let b = t.as_bytes();
    let mut i = 0;
    if b.first() == Some(&b'-') {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;
    let mut frac_digits = 0;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == b.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_parsing() {
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("  -3.5e2x"), -350.0);
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("+7"), 7.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
    }

    #[test]
    fn cell_inference() {
        assert_eq!(infer_cell("3"), Value::Number(3.0));
        assert_eq!(infer_cell(" 2.5 "), Value::Number(2.5));
        assert_eq!(infer_cell("-1e3"), Value::Number(-1000.0));
        assert_eq!(infer_cell("TRUE"), Value::Bool(true));
        assert_eq!(infer_cell("false"), Value::Bool(false));
        assert_eq!(infer_cell("True"), Value::Text("True".into()));
        assert_eq!(infer_cell(""), Value::Missing);
        assert_eq!(infer_cell("+4"), Value::Text("+4".into()));
        assert_eq!(infer_cell("12abc"), Value::Text("12abc".into()));
        assert_eq!(infer_cell("1e999"), Value::Text("1e999".into()));
    }

    #[test]
    fn cell_inference_bounds_magnitude() {
        assert_eq!(infer_cell("1e20"), Value::Text("1e20".into()));
        assert_eq!(infer_cell("9007199254740992"), Value::Text("9007199254740992".into()));
        assert_eq!(infer_cell("-9007199254740992"), Value::Text("-9007199254740992".into()));
        assert_eq!(infer_cell("9007199254740991"), Value::Number(9007199254740991.0));
        assert_eq!(infer_cell("1e15"), Value::Number(1e15));
    }
}
