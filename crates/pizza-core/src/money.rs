//! # Money Module
//!
//! Provides the `Money` type used for every price on the order form.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With doubles:                                                          │
//! │    14.00 * 0.07 = 0.9800000000000001                                    │
//! │    The receipt only looks right because "%.2f" hides it.                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1400 cents × 700 bps / 10000 = 98 cents                              │
//! │    The stored value IS the printed value.                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::money::Money;
//!
//! let medium = Money::from_major_minor(12, 0); // $12.00
//! let topping = Money::from_cents(100);        // $1.00
//!
//! let subtotal = medium + topping.multiply_quantity(2);
//! assert_eq!(subtotal.cents(), 1400);
//! assert_eq!(subtotal.to_string(), "$14.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// SizeOption::price() ──┐
///                       ├──► PricedOrder.subtotal ──► tax ──► total
/// Topping::price() ─────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let price = Money::from_cents(800);
    /// assert_eq!(price.cents(), 800);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(20, 0).cents(), 2000);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounded half up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 is the half-cent that makes the division round.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::money::Money;
    /// use pizza_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(2100); // $21.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(700));
    /// assert_eq!(tax.cents(), 147);           // $1.47
    ///
    /// // $0.50 at 7% = 3.5 cents → 4 cents
    /// let tax = Money::from_cents(50).calculate_tax(TaxRate::from_bps(700));
    /// assert_eq!(tax.cents(), 4);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so that amount * bps can never overflow
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies a unit price by a count.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let topping = Money::from_cents(100);
    /// assert_eq!(topping.multiply_quantity(3).cents(), 300);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `$D.CC`. The desktop app has its own formatter that honours the
/// configured currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing line prices (e.g. the topping lines of a receipt).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1498);
        assert_eq!(money.cents(), 1498);
        assert_eq!(money.dollars(), 14);
        assert_eq!(money.cents_part(), 98);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1498).to_string(), "$14.98");
        assert_eq!(Money::from_cents(800).to_string(), "$8.00");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1200);
        let b = Money::from_cents(100);

        assert_eq!((a + b).cents(), 1300);
        assert_eq!((a - b).cents(), 1100);
        assert_eq!((b * 6).cents(), 600);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1300);
    }

    #[test]
    fn test_sum() {
        let lines = vec![Money::from_cents(100), Money::from_cents(100)];
        let by_ref: Money = lines.iter().sum();
        let by_value: Money = lines.into_iter().sum();
        assert_eq!(by_ref.cents(), 200);
        assert_eq!(by_value, by_ref);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_seven_percent_tax() {
        let rate = TaxRate::from_bps(700);
        assert_eq!(Money::from_cents(1400).calculate_tax(rate).cents(), 98);
        assert_eq!(Money::from_cents(2100).calculate_tax(rate).cents(), 147);
        assert_eq!(Money::from_cents(900).calculate_tax(rate).cents(), 63);
        assert_eq!(Money::from_cents(2600).calculate_tax(rate).cents(), 182);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // 50 cents × 7% = 3.5 cents
        let tax = Money::from_cents(50).calculate_tax(TaxRate::from_bps(700));
        assert_eq!(tax.cents(), 4);

        // 10.00 × 8.25% = 82.5 cents
        let tax = Money::from_cents(1000).calculate_tax(TaxRate::from_bps(825));
        assert_eq!(tax.cents(), 83);
    }

    #[test]
    fn test_zero_rate_is_free() {
        let tax = Money::from_cents(2000).calculate_tax(TaxRate::zero());
        assert!(tax.is_zero());
        assert!(!tax.is_negative());
    }
}
