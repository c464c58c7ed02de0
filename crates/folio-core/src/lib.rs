//! # folio-core: Pure Business Logic for FolioPress
//!
//! This crate is the **heart** of the FolioPress publishing portal. It
//! contains the edition configuration core as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FolioPress Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Portal Frontend                              │   │
//! │  │   Format picker ──► Upload ──► Pricing ──► Commission view       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ folio-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────────┐ ┌───────┐ │   │
//! │  │  │ catalog │ │ pricing │ │commission│ │completeness│ │edition│ │   │
//! │  │  │ formats │ │CostModel│ │ channel  │ │  status    │ │session│ │   │
//! │  │  │ lookup  │ │min price│ │  splits  │ │  machine   │ │ state │ │   │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └────────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              folio-content (Manuscript Inspection)               │   │
//! │  │        the one async operation: measure the uploaded PDF         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (formats, print options, breakdowns, flags)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`catalog`] - Static book format catalog
//! - [`validation`] - Custom format input validation
//! - [`pricing`] - Cost model and minimum price calculation
//! - [`commission`] - Channel commission splits
//! - [`completeness`] - Edition lifecycle state machine
//! - [`edition`] - Session-owned configuration state with one recompute pass
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in euro cents (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Closed Option Tables**: Paper, cover and spine options are enums, so an
//!    unknown key is unrepresentable instead of a silent zero-cost fallback
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_core::pricing::compute_minimum_price;
//! use folio_core::types::{PaperType, CoverFinish, SpineType};
//!
//! let result = compute_minimum_price(
//!     250,
//!     0,
//!     PaperType::TextdruckWeiss,
//!     CoverFinish::Matt,
//!     SpineType::Gerade,
//!     false,
//! );
//!
//! // 250 pages of white text paper at 2 ct/page = 5.00 €
//! assert_eq!(result.breakdown.paper.cents(), 500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod commission;
pub mod completeness;
pub mod edition;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use folio_core::Money` instead of
// `use folio_core::money::Money`

pub use catalog::FormatCatalog;
pub use edition::EditionConfigurationState;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tolerance applied when matching measured manuscript dimensions against
/// the expected trim size, in millimeters, symmetric on width and height.
///
/// ## Why a tolerance?
/// PDF page boxes are specified in points and are rarely exact integer
/// millimeters after conversion. One millimeter absorbs the conversion
/// noise without accepting a genuinely wrong trim size.
pub const DIMENSION_TOLERANCE_MM: f64 = 1.0;

/// Allowed envelope for custom trim sizes, in centimeters.
///
/// These bounds come from the print shop's machinery limits: anything
/// narrower than 10.8 cm or taller than 29.7 cm (A4 height) cannot be
/// produced.
pub const CUSTOM_WIDTH_MIN_CM: f64 = 10.8;
pub const CUSTOM_WIDTH_MAX_CM: f64 = 21.0;
pub const CUSTOM_HEIGHT_MIN_CM: f64 = 17.0;
pub const CUSTOM_HEIGHT_MAX_CM: f64 = 29.7;
