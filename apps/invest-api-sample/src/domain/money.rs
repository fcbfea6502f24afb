//! Money Values
//!
//! The API encodes every number as an integer part (`units`) plus
//! billionths (`nano`). Both parts carry the sign of the value, so
//! `-1.5` arrives as `units = -1, nano = -500_000_000`.

use std::fmt;

use rust_decimal::Decimal;

/// Number of fractional digits in the `nano` part.
const NANO_SCALE: u32 = 9;

/// Combine a `units`/`nano` pair into a decimal.
#[must_use]
pub fn decimal_from_parts(units: i64, nano: i32) -> Decimal {
    Decimal::from(units) + Decimal::new(i64::from(nano), NANO_SCALE)
}

/// Amount of money in a given currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    /// ISO currency code as sent by the API (lowercase, e.g. `rub`).
    pub currency: String,
    /// Amount.
    pub amount: Decimal,
}

impl Money {
    /// Build a money value from its wire parts.
    #[must_use]
    pub fn from_parts(currency: impl Into<String>, units: i64, nano: i32) -> Self {
        Self {
            currency: currency.into(),
            amount: decimal_from_parts(units, nano),
        }
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount.normalize(), self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(114, 250_000_000, "114.25" ; "positive with fraction")]
    #[test_case(0, 0, "0" ; "zero")]
    #[test_case(-1, -500_000_000, "-1.5" ; "negative keeps sign on both parts")]
    #[test_case(0, 1, "0.000000001" ; "smallest nano")]
    #[test_case(42, 0, "42" ; "whole units")]
    fn decimal_from_wire_parts(units: i64, nano: i32, expected: &str) {
        assert_eq!(decimal_from_parts(units, nano).normalize().to_string(), expected);
    }

    #[test]
    fn money_display() {
        let money = Money::from_parts("rub", 1_500, 100_000_000);
        assert_eq!(money.to_string(), "1500.1 rub");
        assert!(!money.is_zero());
        assert!(Money::from_parts("usd", 0, 0).is_zero());
    }
}
