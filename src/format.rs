//! # Format Module
//!
//! Text rendering for floating-point results.
//!
//! [`FloatStyle::Significant`] follows printf's `%g`: pick fixed or
//! scientific notation from the decimal exponent after rounding to the
//! requested precision, then drop trailing zeros.

use crate::config::FloatStyle;

pub fn format_float(value: f64, style: FloatStyle) -> String {
    match style {
        FloatStyle::Shortest => value.to_string(),
        FloatStyle::Significant(digits) => format_significant(value, digits),
    }
}

/// `%g` with `digits` significant digits (0 is treated as 1).
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let precision = digits.max(1);

    // Round first; the exponent of the rounded value decides the notation.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Removes trailing zeros after a decimal point, then the point itself.
fn trim_fraction(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}
