//! # Commission Module
//!
//! Splits a selling price into channel-specific author commissions.
//!
//! ## Channel Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Commission per Channel                              │
//! │                                                                         │
//! │  base commission rate (policy config, whole percent)                   │
//! │       │                                                                 │
//! │       ├──► bookstore:   max(0, base − 10) %                            │
//! │       │    the bookstore channel absorbs a 40% trade discount, so      │
//! │       │    its commission rate sits 10 points lower                    │
//! │       │                                                                 │
//! │       └──► online shop: base + 5 %                                     │
//! │            direct-channel incentive                                    │
//! │                                                                         │
//! │  net per sale = selling − production − platform fee                    │
//! │                 − trade discount (bookstore only) − commission          │
//! │                                                                         │
//! │  Negative nets are SURFACED, never clamped: the author must see an     │
//! │  uneconomical configuration.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::{CommissionOutcome, CommissionSplit};

// =============================================================================
// Policy Constants
// =============================================================================
// These are publisher policy, not user input.

/// Platform fee, in basis points of the selling price (10%).
pub const PLATFORM_FEE_BPS: u32 = 1000;

/// Trade discount granted to bookstores, in basis points (40%).
pub const TRADE_DISCOUNT_BPS: u32 = 4000;

/// How far the bookstore commission rate sits below the base rate.
pub const BOOKSTORE_COMMISSION_MARKDOWN_PCT: u32 = 10;

/// How far the online-shop commission rate sits above the base rate.
pub const ONLINE_SHOP_COMMISSION_BONUS_PCT: u32 = 5;

// =============================================================================
// Calculator
// =============================================================================

/// Computes the channel commission split for a selling price.
///
/// Pure function. `minimum_price == 0` (not yet priceable) short-circuits
/// to [`CommissionOutcome::NotApplicable`] instead of dividing by zero or
/// producing a meaningless split.
///
/// ## Example
/// ```rust
/// use folio_core::commission::compute_commission;
/// use folio_core::money::Money;
///
/// let outcome = compute_commission(Money::from_cents(1500), Money::from_cents(1025), 30);
/// let split = outcome.split().unwrap();
/// assert_eq!(split.bookstore_pct, 20);
/// assert_eq!(split.online_shop_pct, 35);
/// ```
pub fn compute_commission(
    selling_price: Money,
    minimum_price: Money,
    base_commission_pct: u32,
) -> CommissionOutcome {
    if minimum_price.is_zero() {
        return CommissionOutcome::NotApplicable;
    }

    let bookstore_pct = base_commission_pct.saturating_sub(BOOKSTORE_COMMISSION_MARKDOWN_PCT);
    let online_shop_pct = base_commission_pct + ONLINE_SHOP_COMMISSION_BONUS_PCT;

    // Production cost is exactly the minimum price: that is what the floor
    // covers.
    let production = minimum_price;
    let platform_fee = selling_price.percentage_bps(PLATFORM_FEE_BPS);
    let trade_discount = selling_price.percentage_bps(TRADE_DISCOUNT_BPS);

    let bookstore_net = selling_price
        - production
        - platform_fee
        - trade_discount
        - selling_price.percentage(bookstore_pct);

    let online_shop_net =
        selling_price - production - platform_fee - selling_price.percentage(online_shop_pct);

    CommissionOutcome::Split(CommissionSplit {
        bookstore_pct,
        online_shop_pct,
        bookstore_net,
        online_shop_net,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_at_base_30() {
        // Reference scenario: selling == minimum, base 30% → 20% / 35%
        let minimum = Money::from_cents(1025);
        let split = compute_commission(minimum, minimum, 30).split().copied().unwrap();

        assert_eq!(split.bookstore_pct, 20);
        assert_eq!(split.online_shop_pct, 35);
    }

    #[test]
    fn test_offset_invariant_across_base_rates() {
        let selling = Money::from_cents(2000);
        let minimum = Money::from_cents(1000);

        for base in 10..=60 {
            let split = compute_commission(selling, minimum, base).split().copied().unwrap();
            assert_eq!(split.bookstore_pct, base - 10);
            assert_eq!(split.online_shop_pct, base + 5);
        }

        // Below 10 the bookstore rate floors at zero instead of going
        // negative
        for base in 0..10 {
            let split = compute_commission(selling, minimum, base).split().copied().unwrap();
            assert_eq!(split.bookstore_pct, 0);
            assert_eq!(split.online_shop_pct, base + 5);
        }
    }

    #[test]
    fn test_not_applicable_before_pricing() {
        // No minimum price yet: must not divide, must not panic
        let outcome = compute_commission(Money::from_cents(999), Money::zero(), 30);
        assert_eq!(outcome, CommissionOutcome::NotApplicable);
        assert!(outcome.split().is_none());
    }

    #[test]
    fn test_negative_nets_are_surfaced() {
        // Selling at exactly the floor leaves nothing for fee, discount
        // and commission: both nets must go negative, visibly.
        let minimum = Money::from_cents(1025);
        let split = compute_commission(minimum, minimum, 30).split().copied().unwrap();

        assert!(split.bookstore_net.is_negative());
        assert!(split.online_shop_net.is_negative());
    }

    #[test]
    fn test_net_arithmetic() {
        // selling 20.00, minimum 10.00, base 30%
        // fee 10% = 2.00, trade 40% = 8.00
        // bookstore: 20 − 10 − 2 − 8 − 20%·20(=4.00) = −4.00
        // online:    20 − 10 − 2 − 35%·20(=7.00)     = +1.00
        let split = compute_commission(Money::from_cents(2000), Money::from_cents(1000), 30)
            .split()
            .copied()
            .unwrap();

        assert_eq!(split.bookstore_net.cents(), -400);
        assert_eq!(split.online_shop_net.cents(), 100);
    }

    #[test]
    fn test_pure_and_idempotent() {
        let a = compute_commission(Money::from_cents(1799), Money::from_cents(1025), 25);
        let b = compute_commission(Money::from_cents(1799), Money::from_cents(1025), 25);
        assert_eq!(a, b);
    }
}
