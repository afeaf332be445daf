//! Human-readable dollar amounts.

/// Formats a dollar amount with thousands separators.
///
/// The value is rounded to `decimals` places first. No currency symbol is
/// added.
///
/// ```
/// use qualifying_offer::domain::format_dollars;
///
/// assert_eq!(format_dollars(19_234_567.333, 2), "19,234,567.33");
/// assert_eq!(format_dollars(999.6, 0), "1,000");
/// ```
#[must_use]
pub fn format_dollars(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0.0, 2, "0.00"; "zero")]
    #[test_case(12.0, 0, "12"; "short")]
    #[test_case(123.0, 0, "123"; "three digits")]
    #[test_case(1234.0, 0, "1,234"; "four digits")]
    #[test_case(123_456.0, 2, "123,456.00"; "six digits")]
    #[test_case(1_234_567.0, 0, "1,234,567"; "seven digits")]
    #[test_case(15_970_983.736, 2, "15,970,983.74"; "rounds")]
    #[test_case(999_999.996, 2, "1,000,000.00"; "rounding carries")]
    #[test_case(-1234.5, 1, "-1,234.5"; "negative")]
    #[test_case(-0.001, 2, "0.00"; "negative zero after rounding")]
    fn formats(value: f64, decimals: usize, expected: &str) {
        assert_eq!(format_dollars(value, decimals), expected);
    }
}
