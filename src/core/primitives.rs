use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Decimal places kept for percentage annotations.
pub const PERCENTAGE_DECIMALS: u32 = 2;

/// Rounds to two decimals, ties to even.
///
/// Values that cannot be represented as a decimal are returned unchanged.
#[must_use]
pub fn round_percentage(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(PERCENTAGE_DECIMALS))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Formats a percentage with at most two decimals and no trailing zeros,
/// e.g. `12.5`, `33.33`, `100`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(d) => d.round_dp(PERCENTAGE_DECIMALS).normalize().to_string(),
        None => format!("{value:.2}"),
    }
}

/// Division that yields zero for a zero denominator.
#[must_use]
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::{format_percentage, ratio_or_zero, round_percentage};

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_percentage(33.33333), 33.33);
        assert_eq!(round_percentage(66.666_666), 66.67);
    }

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(format_percentage(12.5), "12.5");
        assert_eq!(format_percentage(100.0), "100");
        assert_eq!(format_percentage(1.0 / 3.0 * 100.0), "33.33");
    }

    #[test]
    fn zero_denominator_yields_zero() {
        assert_eq!(ratio_or_zero(5.0, 0.0), 0.0);
    }
}
