pub mod calc;
pub mod rates;
pub mod session;

use rust_decimal::Decimal;

/// Parse a monetary amount, rejecting negatives. Negative prices are refused
/// here at the input boundary; the converter itself never sees them.
pub fn parse_amount(s: &str) -> Result<Decimal, String> {
    let amount: Decimal = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid amount", s))?;
    if amount.is_sign_negative() {
        return Err(format!("amount must not be negative: {}", amount));
    }
    Ok(amount)
}

/// Parse a rounding increment, which must be strictly positive (e.g. 1 or 0.5)
pub fn parse_increment(s: &str) -> Result<Decimal, String> {
    let increment: Decimal = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid rounding increment", s))?;
    if increment.is_sign_negative() || increment.is_zero() {
        return Err(format!(
            "rounding increment must be greater than zero: {}",
            increment
        ));
    }
    Ok(increment)
}

pub fn format_inr(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_amount_accepts_non_negative() {
        assert_eq!(parse_amount("0"), Ok(dec!(0)));
        assert_eq!(parse_amount(" 99.99 "), Ok(dec!(99.99)));
    }

    #[test]
    fn parse_amount_rejects_negative_and_garbage() {
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn parse_increment_requires_positive() {
        assert_eq!(parse_increment("0.5"), Ok(dec!(0.5)));
        assert!(parse_increment("0").is_err());
        assert!(parse_increment("-1").is_err());
    }

    #[test]
    fn inr_formatting() {
        assert_eq!(format_inr(dec!(118)), "₹118.00");
        assert_eq!(format_inr(dec!(9.5)), "₹9.50");
    }
}
