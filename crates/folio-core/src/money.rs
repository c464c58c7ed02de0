//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  For a minimum sellable price this is fatal: a price floor that is      │
//! │  off by a fraction of a cent can round BELOW production cost.           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount is i64 euro cents. The one place a sub-cent rate        │
//! │    exists (the per-page production rate) goes through an explicit       │
//! │    ceiling conversion, so the floor can only ever round UP.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use folio_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99 €
//! let fee = price.percentage_bps(1000); // 10% platform fee
//! assert_eq!(fee.cents(), 110);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in euro cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Channel nets may legitimately be negative when a
///   selling price sits too close to the minimum; that must be visible,
///   not clamped away
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for the edition record surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99 €
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from tenths of a cent, rounding UP to the
    /// next whole cent.
    ///
    /// ## Why ceiling?
    /// The per-page production rate is quoted in tenths of a cent. The
    /// minimum price must never round below true production cost, so the
    /// fractional remainder always rounds against the seller.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// assert_eq!(Money::from_tenth_cents_ceil(3750).cents(), 375);
    /// assert_eq!(Money::from_tenth_cents_ceil(3751).cents(), 376);
    /// ```
    #[inline]
    pub const fn from_tenth_cents_ceil(tenth_cents: i64) -> Self {
        Money((tenth_cents + 9) / 10)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates a percentage of this amount, given in basis points,
    /// rounding half a cent up.
    ///
    /// ## Basis Points
    /// 1 basis point = 0.01% = 1/10000. 1000 bps = 10% (the platform fee),
    /// 4000 bps = 40% (the bookstore trade discount).
    ///
    /// ## Implementation
    /// Integer math throughout: `(amount * bps + 5000) / 10000`, with i128
    /// intermediates so large amounts cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let price = Money::from_cents(1025); // 10.25 €
    /// assert_eq!(price.percentage_bps(4000).cents(), 410); // 40%
    /// ```
    pub fn percentage_bps(&self, bps: u32) -> Money {
        let part = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(part as i64)
    }

    /// Calculates a whole-percent share of this amount.
    ///
    /// Convenience over [`Money::percentage_bps`] for the commission rates,
    /// which are policy percentages without fractional parts.
    #[inline]
    pub fn percentage(&self, pct: u32) -> Money {
        self.percentage_bps(pct * 100)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and log output. The frontend formats amounts
/// itself to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02} €", sign, self.euros().abs(), self.cents_part())
    }
}

/// Default money is zero.
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a count (per-page rates, per-copy surcharges).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Money(self.0 * count as i64)
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
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.euros(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_tenth_cents_rounds_up_never_down() {
        // Exact multiples stay exact
        assert_eq!(Money::from_tenth_cents_ceil(0).cents(), 0);
        assert_eq!(Money::from_tenth_cents_ceil(100).cents(), 10);
        // Any remainder rounds up
        assert_eq!(Money::from_tenth_cents_ceil(101).cents(), 11);
        assert_eq!(Money::from_tenth_cents_ceil(109).cents(), 11);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99 €");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00 €");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50 €");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00 €");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3i64).cents(), 3000);
    }

    #[test]
    fn test_percentage_bps() {
        // 10.00 € at 10% = 1.00 €
        let amount = Money::from_cents(1000);
        assert_eq!(amount.percentage_bps(1000).cents(), 100);

        // 10.25 € at 40% = 4.10 €
        let amount = Money::from_cents(1025);
        assert_eq!(amount.percentage_bps(4000).cents(), 410);

        // Half cents round up: 10.01 € at 50% = 5.005 → 5.01 €
        let amount = Money::from_cents(1001);
        assert_eq!(amount.percentage_bps(5000).cents(), 501);
    }

    #[test]
    fn test_percentage_whole() {
        let amount = Money::from_cents(2000);
        assert_eq!(amount.percentage(35).cents(), 700);
        assert_eq!(amount.percentage(0).cents(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_ordering_supports_floor_clamping() {
        let floor = Money::from_cents(1025);
        let below = Money::from_cents(900);
        // Ord is derived, so the recompute pass can clamp with `max`
        assert_eq!(below.max(floor), floor);
        assert_eq!(floor.max(below), floor);
    }
}
