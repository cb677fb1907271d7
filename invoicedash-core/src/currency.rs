//! Currency display helpers
//!
//! Amounts are stored as integer cents. Display follows the en-US USD
//! convention: `$` prefix, comma thousands separators, two decimals.

/// Format an amount in cents as a USD display string.
///
/// ```
/// use invoicedash_core::format_currency;
///
/// assert_eq!(format_currency(15795), "$157.95");
/// assert_eq!(format_currency(123456789), "$1,234,567.89");
/// assert_eq!(format_currency(-500), "-$5.00");
/// ```
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let remainder = abs % 100;

    format!("{}${}.{:02}", sign, group_thousands(dollars), remainder)
}

/// Convert cents to dollars for form fields.
pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_amounts() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(666), "$6.66");
        assert_eq!(format_currency(3040), "$30.40");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(100_000), "$1,000.00");
        assert_eq!(format_currency(54_246), "$542.46");
        assert_eq!(format_currency(99_999_999), "$999,999.99");
        assert_eq!(format_currency(100_000_000), "$1,000,000.00");
    }

    #[test]
    fn negative_amounts_lead_with_sign() {
        assert_eq!(format_currency(-1), "-$0.01");
        assert_eq!(format_currency(-123_456), "-$1,234.56");
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(format_currency(i64::MIN), "-$92,233,720,368,547,758.08");
        assert_eq!(format_currency(i64::MAX), "$92,233,720,368,547,758.07");
    }

    #[test]
    fn deterministic() {
        assert_eq!(format_currency(44_800), format_currency(44_800));
    }

    #[test]
    fn dollars_conversion() {
        assert_eq!(cents_to_dollars(15795), 157.95);
        assert_eq!(cents_to_dollars(0), 0.0);
        assert_eq!(cents_to_dollars(-250), -2.5);
    }
}
