//! Number formatting for the results log.
//!
//! Values are written the way C's `%g` conversion writes them so that logs stay
//! comparable with those produced by the solver's own tooling.

/// Formats `value` with `precision` significant digits using the `%g` rules:
/// scientific notation when the decimal exponent is below -4 or at least
/// `precision`, fixed notation otherwise, trailing zeros removed.
pub fn format_general(value: f64, precision: usize) -> String {
    let special = if value.is_nan() {
        Some("nan")
    } else if value.is_infinite() {
        Some("inf")
    } else if value == 0.0 {
        Some("0")
    } else {
        None
    };
    if let Some(word) = special {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{}{}", sign, word);
    }

    let precision = precision.max(1);

    // Round once in scientific form; the exponent after rounding decides the style.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let mantissa = strip_trailing_zeros(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        strip_trailing_zeros(&fixed).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
