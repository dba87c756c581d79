//! Fixed-point monetary type with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so balances and
//! receipt totals never accumulate floating-point drift. Rate application
//! (tax, discount) rounds half-to-even at 2 decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount carried at exactly 2 decimal places.
///
/// This type wraps `rust_decimal::Decimal` and keeps a consistent scale
/// across all arithmetic, suitable for cash amounts.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use teller::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Applies a fractional rate (e.g. a 0.07 tax rate), rounding the
    /// product half-to-even at 2 decimal places.
    pub fn apply_rate(&self, rate: Decimal) -> Self {
        Money(
            (self.0 * rate).round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointNearestEven),
        )
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::new(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    /// Unit price times quantity; exact at scale 2.
    fn mul(self, quantity: u32) -> Self::Output {
        Money::new(self.0 * Decimal::from(quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_str_normalizes_scale() {
        let m = Money::from_str("1.0").unwrap();
        assert_eq!(m.to_string(), "1.00");

        let m = Money::from_str("1.5").unwrap();
        assert_eq!(m.to_string(), "1.50");

        let m = Money::from_str("1.25").unwrap();
        assert_eq!(m.to_string(), "1.25");

        let m = Money::from_str("  2.5  ").unwrap();
        assert_eq!(m.to_string(), "2.50");
    }

    #[test]
    fn test_arithmetic_preserves_scale() {
        let a = Money::from_str("1.5").unwrap();
        let b = Money::from_str("2.5").unwrap();

        assert_eq!((a + b).to_string(), "4.00");
        assert_eq!((b - a).to_string(), "1.00");
    }

    #[test]
    fn test_quantity_multiplication() {
        let unit = Money::new(dec!(2.00));
        assert_eq!((unit * 3).to_string(), "6.00");
        assert_eq!((unit * 0).to_string(), "0.00");
    }

    #[test]
    fn test_apply_rate() {
        let subtotal = Money::new(dec!(16.00));
        assert_eq!(subtotal.apply_rate(dec!(0.07)).to_string(), "1.12");
        assert_eq!(subtotal.apply_rate(dec!(0.05)).to_string(), "0.80");
    }

    #[test]
    fn test_apply_rate_rounds_half_to_even() {
        // 0.125 rounds to 0.12, 0.135 rounds to 0.14
        let m = Money::new(dec!(2.50));
        assert_eq!(m.apply_rate(dec!(0.05)).to_string(), "0.12");
        let m = Money::new(dec!(2.70));
        assert_eq!(m.apply_rate(dec!(0.05)).to_string(), "0.14");
    }

    #[test]
    fn test_zero_constant() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_positive());
    }

    #[test]
    fn test_is_positive() {
        assert!(Money::from_str("0.01").unwrap().is_positive());
        assert!(!Money::from_str("-1.0").unwrap().is_positive());
    }
}
