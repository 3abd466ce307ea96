//! Significant-digit formatting for merit values.

/// Number of significant digits used when no override is configured.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// Display precision handed to every merit print.
///
/// `0` selects the ambient default; any positive value applies to a single
/// print only, since the value is passed by argument rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Precision {
    digits: u32,
}

impl Precision {
    /// Creates a precision from the configured number of significant digits.
    pub const fn new(digits: u32) -> Self {
        Self { digits }
    }

    /// Precision that defers to the ambient default.
    pub const fn ambient() -> Self {
        Self { digits: 0 }
    }

    /// Configured digits, `0` meaning "ambient".
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Digits actually used when formatting.
    pub fn effective_digits(&self) -> usize {
        if self.digits == 0 {
            DEFAULT_SIGNIFICANT_DIGITS
        } else {
            self.digits as usize
        }
    }

    /// Formats `value` with this precision.
    pub fn format(&self, value: f64) -> String {
        format_significant(value, self.effective_digits())
    }
}

/// Formats `value` in general notation with `digits` significant digits.
///
/// Fixed notation is used when the decimal exponent lies in `[-4, digits)`,
/// scientific notation otherwise; trailing zeros are dropped in both cases.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_precision_uses_six_digits() {
        assert_eq!(Precision::ambient().format(0.123456789), "0.123457");
        assert_eq!(Precision::ambient().format(3.0), "3");
    }

    #[test]
    fn explicit_precision_limits_significant_digits() {
        let precision = Precision::new(3);
        assert_eq!(precision.format(0.123456), "0.123");
        assert_eq!(precision.format(12.56), "12.6");
        assert_eq!(precision.format(1234.0), "1.23e+03");
    }

    #[test]
    fn small_values_switch_to_scientific() {
        assert_eq!(format_significant(0.0000012345, 3), "1.23e-06");
        assert_eq!(format_significant(0.00012345, 3), "0.000123");
    }

    #[test]
    fn non_finite_values_are_spelled_out() {
        assert_eq!(format_significant(f64::INFINITY, 4), "inf");
        assert_eq!(format_significant(f64::NAN, 4), "nan");
    }
}
