//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    999.9 * 0.1 = 99.99000000000001  ❌ WRONG!                           │
//! │                                                                         │
//! │  Shipping tiers compare against exact thresholds (> ₹1000),             │
//! │  so a stray 0.0000001 moves an order into the wrong tier.               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹1000.01 = 100001 paise > 100000 paise                               │
//! │    Every comparison and sum is exact                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_paise(24_950); // ₹249.50
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // ₹499.00
//! let total = price + Money::from_rupees(55);    // ₹304.50
//! assert_eq!(doubled.paise(), 49_900);
//! assert_eq!(total.paise(), 30_450);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Percentage;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: a discount above 100% yields a negative discounted
///   subtotal instead of a panic; nothing in the calculator clamps it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as a bare integer**: the email backend and the frontend
///   both receive paise
/// - **Saturating arithmetic**: sums, products and portions clamp at the
///   i64 bounds (about ₹9.2e16), so an absurd deserialized price cannot
///   wrap or panic the calculator
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price_per_weight ──► LineItem.line_total ──► Subtotal          │
/// │                                                          │              │
/// │                        Coupon discount ◄─────────────────┤              │
/// │                        Shipping tier   ◄─────────────────┘              │
/// │                                                                         │
/// │  Discounted subtotal ──► Tax ──► Final total ──► Payment gateway        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_paise(24_950); // ₹249.50
    /// assert_eq!(price.paise(), 24_950);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(55).paise(), 5_500);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns `rate` of this amount, rounded half up to the nearest paisa.
    ///
    /// ## Implementation
    /// Integer math in i128: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::Percentage;
    ///
    /// let subtotal = Money::from_rupees(1000);
    /// let ten_percent = Percentage::from_bps(1000);
    /// assert_eq!(subtotal.portion(ten_percent), Money::from_rupees(100));
    /// ```
    pub fn portion(&self, rate: Percentage) -> Money {
        let paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        let paise = i64::try_from(paise).unwrap_or(if paise < 0 { i64::MIN } else { i64::MAX });
        Money::from_paise(paise)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(249);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_rupees(747));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `₹1234.50`, matching the storefront's price labels.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
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
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(24_950);
        assert_eq!(money.paise(), 24_950);
        assert_eq!(money.rupees(), 249);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_paise(123_450).to_string(), "₹1234.50");
        assert_eq!(Money::from_rupees(55).to_string(), "₹55.00");
        assert_eq!(Money::from_paise(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(10);
        let b = Money::from_rupees(5);

        assert_eq!((a + b).paise(), 1_500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3_000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total, Money::from_rupees(20));
    }

    #[test]
    fn test_portion_rounds_half_up() {
        // ₹0.05 at 10% = 0.5 paise → 1 paisa
        assert_eq!(Money::from_paise(5).portion(Percentage::from_bps(1000)).paise(), 1);
        // ₹0.04 at 10% = 0.4 paise → 0 paise
        assert_eq!(Money::from_paise(4).portion(Percentage::from_bps(1000)).paise(), 0);
    }

    #[test]
    fn test_portion_zero_rate() {
        let amount = Money::from_rupees(999);
        assert!(amount.portion(Percentage::zero()).is_zero());
    }

    #[test]
    fn test_overflow_saturates() {
        let huge = Money::from_paise(i64::MAX / 2);

        assert_eq!(huge.multiply_quantity(99).paise(), i64::MAX);
        assert_eq!((huge + huge + huge).paise(), i64::MAX);
        assert_eq!((Money::from_paise(i64::MIN) - huge).paise(), i64::MIN);

        let total: Money = vec![huge; 5].into_iter().sum();
        assert_eq!(total.paise(), i64::MAX);

        // 650% of i64::MAX does not fit back into i64
        let portion = Money::from_paise(i64::MAX).portion(Percentage::from_bps(65_000));
        assert_eq!(portion.paise(), i64::MAX);
        let portion = Money::from_paise(i64::MIN).portion(Percentage::from_bps(65_000));
        assert_eq!(portion.paise(), i64::MIN);
    }

    #[test]
    fn test_serializes_as_bare_paise() {
        let json = serde_json::to_string(&Money::from_paise(24_950)).unwrap();
        assert_eq!(json, "24950");
    }
}
