//! Money helpers over decimal arithmetic.
//!
//! Prices and totals are plain [`Decimal`] values in the store's single
//! display currency. Totals are rounded to two decimal places exactly once
//! per value; callers that sum rounded values round the sum once more.

use rust_decimal::Decimal;

/// Round a monetary amount to two decimal places (banker's rounding off;
/// midpoints round away from zero, matching the storefront display rules).
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Format a monetary amount for display (e.g. `$19.99`).
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", round_money(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money_two_places() {
        let amount: Decimal = "48.004".parse().expect("valid decimal");
        assert_eq!(round_money(amount).to_string(), "48.00");
    }

    #[test]
    fn test_round_money_midpoint_up() {
        let amount: Decimal = "19.995".parse().expect("valid decimal");
        assert_eq!(round_money(amount).to_string(), "20.00");
    }

    #[test]
    fn test_format_usd() {
        let amount: Decimal = "24".parse().expect("valid decimal");
        assert_eq!(format_usd(amount), "$24.00");
    }

    #[test]
    fn test_format_usd_zero() {
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }
}
