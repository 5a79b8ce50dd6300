//! Scalar formatting

/// Significant digits shown for quantity scalars
pub const SIGNIFICANT_DIGITS: usize = 5;

/// Format a scalar with `SIGNIFICANT_DIGITS` significant digits.
///
/// Fixed notation when the decimal exponent lies in `[-4, SIGNIFICANT_DIGITS)`,
/// keeping at least one digit after the point (`1.0`, `0.25`); scientific
/// notation otherwise (`1.2346e6`). Trailing zeros are removed.
pub fn format_scalar(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Rounding to the digit budget may bump the exponent (99999.9 -> 1.0000e5)
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        return format!("{mantissa}e{exponent}");
    }

    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
    let fixed = format!("{:.*}", decimals, value);
    if !fixed.contains('.') {
        return format!("{fixed}.0");
    }
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}
