//! Shared utility functions for Budget Explorer crates.

/// Number formatting matching the browser's `Number.prototype.toLocaleString()`
/// for the `en-US` locale.
pub mod format {
    /// Maximum fraction digits kept by `toLocaleString()` with default options.
    const MAX_FRACTION_DIGITS: usize = 3;

    /// Format a number with thousands separators and at most three fraction
    /// digits, e.g. `1234567.891` -> `"1,234,567.891"`.
    pub fn thousands(value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
        }

        let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, f.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        // -0.0004 rounds to "0", which must not keep its sign
        if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
            out.push('-');
        }
        out.push_str(&group_digits(int_part));
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }

    /// Format a dollar amount: `"$"` followed by [`thousands`].
    pub fn currency(value: f64) -> String {
        format!("${}", thousands(value))
    }

    /// Insert a comma every three digits from the right.
    fn group_digits(digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
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
        fn test_thousands_integers() {
            assert_eq!(thousands(0.0), "0");
            assert_eq!(thousands(999.0), "999");
            assert_eq!(thousands(1000.0), "1,000");
            assert_eq!(thousands(1234567.0), "1,234,567");
            assert_eq!(thousands(-4552000.0), "-4,552,000");
        }

        #[test]
        fn test_thousands_fractions() {
            assert_eq!(thousands(1234.5), "1,234.5");
            assert_eq!(thousands(0.125), "0.125");
            assert_eq!(thousands(1.0004), "1");
            assert_eq!(thousands(-0.0001), "0");
        }

        #[test]
        fn test_thousands_non_finite() {
            assert_eq!(thousands(f64::NAN), "NaN");
            assert_eq!(thousands(f64::INFINITY), "∞");
        }

        #[test]
        fn test_currency() {
            assert_eq!(currency(150.0), "$150");
            assert_eq!(currency(2500000.25), "$2,500,000.25");
        }
    }
}
