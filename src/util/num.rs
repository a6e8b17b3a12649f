/// Formats a number with at most `precision` significant digits.
///
/// Values whose decimal exponent is below `-5` or at least `precision` are
/// written in scientific notation with a signed, two digit exponent.
/// Trailing zeros in the fraction are removed. A precision of zero is
/// treated as one.
///
/// ## Example
/// ```
/// use prefixa::util::num::format_number;
///
/// assert_eq!(format_number(std::f64::consts::PI, 9), "3.14159265");
/// assert_eq!(format_number(0.5, 9), "0.5");
/// assert_eq!(format_number(1e20, 9), "1e+20");
/// assert_eq!(format_number(f64::NEG_INFINITY, 9), "-inf");
/// ```
#[must_use]
pub fn format_number(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return scientific;
    };
    let limit = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing is left behind it.
fn trim_fraction(text: &str) -> &str {
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
    fn integers_have_no_fraction() {
        assert_eq!(format_number(1024.0, 9), "1024");
        assert_eq!(format_number(-5.0, 9), "-5");
        assert_eq!(format_number(123_456_789.0, 9), "123456789");
    }

    #[test]
    fn large_values_switch_to_scientific() {
        assert_eq!(format_number(1_234_567_890.0, 9), "1.23456789e+09");
        assert_eq!(format_number(-2.5e100, 9), "-2.5e+100");
    }

    #[test]
    fn small_values_switch_to_scientific() {
        assert_eq!(format_number(0.0001, 9), "0.0001");
        assert_eq!(format_number(0.000_012_5, 9), "1.25e-05");
    }

    #[test]
    fn rounding_can_carry_into_a_new_digit() {
        assert_eq!(format_number(9.999_999_999_9, 9), "10");
    }

    #[test]
    fn precision_limits_digits() {
        assert_eq!(format_number(2.0 / 3.0, 3), "0.667");
        assert_eq!(format_number(1234.0, 2), "1.2e+03");
        assert_eq!(format_number(7.0, 0), "7");
    }

    #[test]
    fn special_values_are_spelled_out() {
        assert_eq!(format_number(f64::NAN, 9), "nan");
        assert_eq!(format_number(f64::INFINITY, 9), "inf");
        assert_eq!(format_number(-0.0, 9), "-0");
        assert_eq!(format_number(0.0, 9), "0");
    }
}
