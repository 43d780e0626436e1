const SUFFIXES: [&str; 5] = ["", "k", "m", "b", "t"];

const SIGNIFICANT_DIGITS: u32 = 3;

/// Rounds `value` to three significant digits, ties to even
fn round_significant(value: u64) -> u64 {
    let digits = value.checked_ilog10().map_or(1, |log| log + 1);
    if digits <= SIGNIFICANT_DIGITS {
        return value;
    }

    let step = 10u128.pow(digits - SIGNIFICANT_DIGITS);
    let value = u128::from(value);
    let (mut quotient, remainder) = (value / step, value % step);
    if remainder * 2 > step || (remainder * 2 == step && quotient % 2 == 1) {
        quotient += 1;
    }
    u64::try_from(quotient * step).unwrap_or(u64::MAX)
}

/// Formats a count with a short magnitude suffix for console output
///
/// The count is first rounded to three significant digits, which may carry
/// it into the next suffix. One decimal is then shown while the scaled value
/// is below 10, none after that.
///
/// # Examples
///
/// ```
/// use word_dictionary::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1_200), "1.2k");
/// assert_eq!(format_count(12_345), "12k");
/// assert_eq!(format_count(1_000_000), "1m");
/// ```
pub fn format_count(value: u64) -> String {
    let value = round_significant(value);
    let mut exponent = 0;
    let mut divisor: u64 = 1;
    while exponent + 1 < SUFFIXES.len() && value / divisor >= 1000 {
        divisor *= 1000;
        exponent += 1;
    }

    let suffix = SUFFIXES[exponent];
    let whole = value / divisor;
    if exponent == 0 || whole >= 10 {
        return format!("{}{}", whole, suffix);
    }

    let tenths = (value % divisor) / (divisor / 10);
    if tenths == 0 {
        format!("{}{}", whole, suffix)
    } else {
        format!("{}.{}{}", whole, tenths, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_unchanged() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_count(1_000), "1k");
        assert_eq!(format_count(1_249), "1.2k");
        assert_eq!(format_count(45_678), "45k");
    }

    #[test]
    fn test_rounding_carries_into_next_suffix() {
        assert_eq!(format_count(1_999), "2k");
        assert_eq!(format_count(9_999), "10k");
        assert_eq!(format_count(999_999), "1m");
        assert_eq!(format_count(9_999_999), "10m");
    }

    #[test]
    fn test_round_significant() {
        assert_eq!(round_significant(0), 0);
        assert_eq!(round_significant(999), 999);
        assert_eq!(round_significant(12_345), 12_300);
        assert_eq!(round_significant(12_350), 12_400);
        assert_eq!(round_significant(12_250), 12_200);
        assert_eq!(round_significant(u64::MAX), 18_400_000_000_000_000_000);
    }

    #[test]
    fn test_larger_magnitudes() {
        assert_eq!(format_count(2_500_000), "2.5m");
        assert_eq!(format_count(3_000_000_000), "3b");
        assert_eq!(format_count(4_100_000_000_000), "4.1t");
    }

    #[test]
    fn test_beyond_largest_suffix() {
        assert_eq!(format_count(5_000_000_000_000_000), "5000t");
    }
}
