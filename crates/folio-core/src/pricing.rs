//! # Pricing Module
//!
//! The cost model and the minimum price calculation.
//!
//! ## Where the Minimum Price Comes From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Minimum Price Derivation                           │
//! │                                                                         │
//! │  page count ─────────┐                                                 │
//! │  color page count ───┤                                                 │
//! │  paper type ─────────┼──► compute_cost() ──► CostBreakdown             │
//! │  cover finish ───────┤                            │                     │
//! │  spine type ─────────┤                            ▼                     │
//! │  custom format? ─────┘    base_production_cost() + Σ breakdown          │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                                             minimum_price               │
//! │                                                                         │
//! │  pages == 0 short-circuits to { 0, all-zero breakdown }: pricing is     │
//! │  undefined before content is uploaded, and that is not an error.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are pure: identical inputs always produce identical
//! output, and there is no hidden state. The caller (the recompute pass in
//! [`crate::edition`]) is responsible for clamping the selling price up
//! whenever a recomputed minimum rises past it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CostBreakdown, CoverFinish, PaperType, SpineType};

// =============================================================================
// Price Table Constants
// =============================================================================
// Per-page paper rates and the flat cover/spine surcharges live on their
// enums in `types.rs`; the remaining rates are here.

/// Flat production base per copy (binding, handling), in cents.
pub const BASE_COST_CENTS: i64 = 100;

/// Per-page production rate, in TENTHS of a cent (15 = 1.5 ct/page).
///
/// Quoted sub-cent by the print shop; the total is rounded UP to the next
/// cent so the price floor can never round below production cost.
pub const BASE_PER_PAGE_TENTH_CENTS: i64 = 15;

/// Surcharge per color-printed page, in cents.
pub const COLOR_PAGE_SURCHARGE_CENTS: i64 = 15;

/// Flat surcharge for custom trim sizes, in cents. Zero for catalog sizes.
pub const CUSTOM_FORMAT_SURCHARGE_CENTS: i64 = 150;

// =============================================================================
// Cost Model
// =============================================================================

/// Maps the current print-option selections to a cost breakdown.
///
/// - paper is per page, cover finish and spine are flat per copy
/// - `color_page_count` is the size of the caller-supplied set of pages
///   marked for color print, not derived here
/// - the format surcharge applies only while a custom format is active
///
/// Unknown option keys cannot occur: paper, cover and spine are closed
/// enums carrying their own price entries.
pub fn compute_cost(
    pages: u32,
    color_page_count: u32,
    paper: PaperType,
    cover: CoverFinish,
    spine: SpineType,
    custom_format_active: bool,
) -> CostBreakdown {
    CostBreakdown {
        paper: paper.price_per_page() * pages,
        cover_finish: cover.surcharge(),
        spine: spine.surcharge(),
        color_pages: Money::from_cents(COLOR_PAGE_SURCHARGE_CENTS) * color_page_count,
        format: if custom_format_active {
            Money::from_cents(CUSTOM_FORMAT_SURCHARGE_CENTS)
        } else {
            Money::zero()
        },
    }
}

// =============================================================================
// Minimum Price
// =============================================================================

/// A computed minimum price together with the breakdown behind it, which
/// the pricing form displays next to the price field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MinimumPrice {
    pub minimum_price: Money,
    pub breakdown: CostBreakdown,
}

impl MinimumPrice {
    /// The explicit "not yet priceable" value used while no content is
    /// uploaded.
    pub const fn undefined() -> Self {
        MinimumPrice {
            minimum_price: Money::zero(),
            breakdown: CostBreakdown::zero(),
        }
    }
}

/// Computes the lowest sellable price for the given configuration.
///
/// `minimum_price = base_production_cost(pages) + Σ breakdown`, where the
/// only sub-cent term (the per-page production rate) rounds up. Returns
/// [`MinimumPrice::undefined`] while `pages == 0`.
pub fn compute_minimum_price(
    pages: u32,
    color_page_count: u32,
    paper: PaperType,
    cover: CoverFinish,
    spine: SpineType,
    custom_format_active: bool,
) -> MinimumPrice {
    if pages == 0 {
        return MinimumPrice::undefined();
    }

    let breakdown = compute_cost(pages, color_page_count, paper, cover, spine, custom_format_active);

    MinimumPrice {
        minimum_price: base_production_cost(pages) + breakdown.total(),
        breakdown,
    }
}

/// Base production cost: flat base plus the per-page rate, rounded up.
fn base_production_cost(pages: u32) -> Money {
    Money::from_cents(BASE_COST_CENTS)
        + Money::from_tenth_cents_ceil(pages as i64 * BASE_PER_PAGE_TENTH_CENTS)
}

// =============================================================================
// Unit Tests
// =============================================================================
