//! # Domain Types
//!
//! Core domain types for the edition configuration workflow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   BookFormat    │   │  ContentAsset   │   │  CostBreakdown  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  key            │   │  file_name      │   │  paper          │       │
//! │  │  name           │   │  page_count     │   │  cover_finish   │       │
//! │  │  trim size      │   │  dimensions     │   │  spine / color  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   PaperType     │   │  EditionStatus  │   │ CommissionSplit │       │
//! │  │  CoverFinish    │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  SpineType      │   │  Draft/Ready/.. │   │  pct + net per  │       │
//! │  │  (closed enums) │   │                 │   │  sales channel  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Option Tables
//! Paper type, cover finish and spine type are enums, not string keys.
//! Every variant carries its price in the table right next to it, so the
//! catalog and the cost model cannot drift apart at runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::DIMENSION_TOLERANCE_MM;

// =============================================================================
// Physical Format
// =============================================================================

/// Bounds for user-defined trim sizes, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomBounds {
    pub min_width_cm: f64,
    pub max_width_cm: f64,
    pub min_height_cm: f64,
    pub max_height_cm: f64,
}

/// The physical trim size of a format: either fixed catalog dimensions or
/// the custom envelope with its machinery bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrimSize {
    /// Fixed dimensions in millimeters.
    Fixed { width_mm: f64, height_mm: f64 },
    /// User-defined dimensions, constrained by `bounds`.
    Custom { bounds: CustomBounds },
}

/// A named physical book format from the static catalog.
///
/// Exactly one catalog entry is custom; all others carry fixed positive
/// dimensions. The catalog is immutable and lives in [`crate::catalog`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookFormat {
    /// Stable key used by the format picker ("a5", "12x19", "custom").
    pub key: &'static str,
    /// Human-readable name shown in the picker.
    pub name: &'static str,
    /// Trim size or custom bounds.
    pub trim: TrimSize,
}

impl BookFormat {
    /// Whether this is the single custom entry.
    #[inline]
    pub const fn is_custom(&self) -> bool {
        matches!(self.trim, TrimSize::Custom { .. })
    }

    /// The expected envelope an uploaded manuscript must match.
    ///
    /// `None` for the custom format: its envelope comes from the
    /// last-validated [`CustomFormatSpec`] instead.
    pub fn envelope(&self) -> Option<FormatEnvelope> {
        match self.trim {
            TrimSize::Fixed { width_mm, height_mm } => Some(FormatEnvelope { width_mm, height_mm }),
            TrimSize::Custom { .. } => None,
        }
    }

    /// Human-readable dimensions for the picker ("148 × 210 mm").
    pub fn dimension_label(&self) -> String {
        match self.trim {
            TrimSize::Fixed { width_mm, height_mm } => {
                format!("{:.0} × {:.0} mm", width_mm, height_mm)
            }
            TrimSize::Custom { bounds } => format!(
                "{:.1}–{:.1} × {:.1}–{:.1} cm",
                bounds.min_width_cm, bounds.max_width_cm, bounds.min_height_cm, bounds.max_height_cm
            ),
        }
    }
}

// =============================================================================
// Custom Format Spec
// =============================================================================

/// A validated user-defined trim size, entered in centimeters.
///
/// ## Parse, Don't Validate
/// The fields are private and there is no public constructor: the only way
/// to obtain a value is through
/// [`crate::validation::validate_custom_format`], so a held spec is always
/// within the machinery bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CustomFormatSpec {
    width_cm: f64,
    height_cm: f64,
}

impl CustomFormatSpec {
    /// Crate-internal constructor; callers go through the validator.
    pub(crate) const fn new(width_cm: f64, height_cm: f64) -> Self {
        CustomFormatSpec { width_cm, height_cm }
    }

    #[inline]
    pub const fn width_cm(&self) -> f64 {
        self.width_cm
    }

    #[inline]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// The manuscript envelope in millimeters.
    pub fn envelope(&self) -> FormatEnvelope {
        FormatEnvelope {
            width_mm: self.width_cm * 10.0,
            height_mm: self.height_cm * 10.0,
        }
    }
}

// =============================================================================
// Dimensions & Envelope
// =============================================================================

/// Measured page dimensions of an uploaded manuscript, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageDimensions {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// The trim size a manuscript is expected to match.
///
/// Resolved from the selected format: fixed catalog dimensions, or the
/// last-validated custom spec.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormatEnvelope {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl FormatEnvelope {
    /// Whether measured dimensions match this envelope within
    /// [`DIMENSION_TOLERANCE_MM`], applied symmetrically on both axes.
    pub fn matches(&self, measured: PageDimensions) -> bool {
        (measured.width_mm - self.width_mm).abs() <= DIMENSION_TOLERANCE_MM
            && (measured.height_mm - self.height_mm).abs() <= DIMENSION_TOLERANCE_MM
    }
}

// =============================================================================
// Print Options (closed enumerations)
// =============================================================================

/// Interior paper stock. Priced per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum PaperType {
    /// 80g white text paper.
    TextdruckWeiss,
    /// 90g cream text paper.
    TextdruckCreme,
    /// 115g photo paper for image-heavy interiors.
    Fotodruck,
}

impl PaperType {
    /// Per-page surcharge.
    pub const fn price_per_page(&self) -> Money {
        match self {
            PaperType::TextdruckWeiss => Money::from_cents(2),
            PaperType::TextdruckCreme => Money::from_cents(3),
            PaperType::Fotodruck => Money::from_cents(10),
        }
    }
}

/// Cover lamination. Priced flat per copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum CoverFinish {
    Matt,
    Glaenzend,
}

impl CoverFinish {
    /// Flat per-copy surcharge.
    pub const fn surcharge(&self) -> Money {
        match self {
            CoverFinish::Matt => Money::from_cents(50),
            CoverFinish::Glaenzend => Money::from_cents(80),
        }
    }
}

/// Spine shape. Priced flat per copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SpineType {
    /// Straight spine, standard binding.
    Gerade,
    /// Rounded spine, hardcover-style binding.
    Gerundet,
}

impl SpineType {
    /// Flat per-copy surcharge.
    pub const fn surcharge(&self) -> Money {
        match self {
            SpineType::Gerade => Money::from_cents(0),
            SpineType::Gerundet => Money::from_cents(120),
        }
    }
}

/// The print options currently selected for an edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrintOptionSelection {
    /// Catalog key of the selected format.
    pub format_key: String,
    pub paper_type: PaperType,
    pub cover_finish: CoverFinish,
    pub spine_type: SpineType,
}

// =============================================================================
// Content Asset
// =============================================================================

/// The uploaded manuscript, as far as pricing and validation care about it.
///
/// Created on upload, replaced wholesale on re-upload, reset to empty on
/// removal. `page_count == 0` means "no content uploaded".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContentAsset {
    pub file_name: Option<String>,
    pub page_count: u32,
    pub dimensions: Option<PageDimensions>,
}

impl ContentAsset {
    /// The "nothing uploaded yet" state.
    pub const fn empty() -> Self {
        ContentAsset {
            file_name: None,
            page_count: 0,
            dimensions: None,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.page_count == 0
    }
}

impl Default for ContentAsset {
    fn default() -> Self {
        ContentAsset::empty()
    }
}

// =============================================================================
// Content Validation Result
// =============================================================================

/// Why a manuscript failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ContentIssue {
    /// The file could not be read or parsed as a PDF.
    Unreadable,
    /// The file parsed but contains no pages.
    NoPages,
    /// The file carries no measurable page box.
    NoDimensions,
    /// Page size does not match the selected format.
    DimensionMismatch {
        measured: PageDimensions,
        expected: FormatEnvelope,
    },
}

/// Structured result of manuscript validation.
///
/// Produced by `folio-content`, consumed here. Expected failures are data,
/// never errors: the user retries with a corrected file without losing any
/// other edition state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContentCheck {
    pub valid: bool,
    pub pages: u32,
    pub dimensions: Option<PageDimensions>,
    pub issue: Option<ContentIssue>,
}

impl ContentCheck {
    /// A manuscript that matched the expected envelope.
    pub fn passed(pages: u32, dimensions: PageDimensions) -> Self {
        ContentCheck {
            valid: true,
            pages,
            dimensions: Some(dimensions),
            issue: None,
        }
    }

    /// A manuscript that failed one specific check.
    pub fn failed(pages: u32, dimensions: Option<PageDimensions>, issue: ContentIssue) -> Self {
        ContentCheck {
            valid: false,
            pages,
            dimensions,
            issue: Some(issue),
        }
    }
}

// =============================================================================
// Derived Pricing Types
// =============================================================================

/// Per-component print-cost breakdown. Purely derived, never stored
/// independently of its inputs; every field is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostBreakdown {
    pub paper: Money,
    pub cover_finish: Money,
    pub spine: Money,
    pub color_pages: Money,
    pub format: Money,
}

impl CostBreakdown {
    /// All-zero breakdown: the "not yet priceable" state.
    pub const fn zero() -> Self {
        CostBreakdown {
            paper: Money::zero(),
            cover_finish: Money::zero(),
            spine: Money::zero(),
            color_pages: Money::zero(),
            format: Money::zero(),
        }
    }

    /// Sum of all components.
    pub fn total(&self) -> Money {
        self.paper + self.cover_finish + self.spine + self.color_pages + self.format
    }
}

/// The edition's price pair.
///
/// Invariant: `selling_price >= minimum_price` whenever
/// `minimum_price > 0`. Enforced by the recompute pass, which clamps the
/// selling price up when the floor rises past it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceState {
    pub minimum_price: Money,
    pub selling_price: Money,
}

// =============================================================================
// Commission Types
// =============================================================================

/// Channel-specific author commission, derived from the price state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommissionSplit {
    /// Commission rate for bookstore sales, in whole percent.
    pub bookstore_pct: u32,
    /// Commission rate for the portal's own online shop, in whole percent.
    pub online_shop_pct: u32,
    /// Net per bookstore sale. May be negative: an uneconomical
    /// configuration is surfaced, never clamped to zero.
    pub bookstore_net: Money,
    /// Net per online-shop sale. May be negative.
    pub online_shop_net: Money,
}

/// Commission result, with an explicit "not yet priceable" state instead
/// of a division-by-zero hazard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CommissionOutcome {
    /// No valid minimum price yet; commission is undefined.
    NotApplicable,
    Split(CommissionSplit),
}

impl CommissionOutcome {
    /// The split, if pricing is defined.
    pub fn split(&self) -> Option<&CommissionSplit> {
        match self {
            CommissionOutcome::NotApplicable => None,
            CommissionOutcome::Split(split) => Some(split),
        }
    }
}

// =============================================================================
// Edition Lifecycle
// =============================================================================

/// Lifecycle status of an edition.
///
/// Only `Draft → Ready` happens automatically (when content and cover both
/// complete). `InReview`, `NeedsRevision` and `Published` are set by an
/// external actor and survive flag recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EditionStatus {
    Draft,
    InReview,
    Ready,
    NeedsRevision,
    Published,
}

impl Default for EditionStatus {
    fn default() -> Self {
        EditionStatus::Draft
    }
}

/// Per-section completion flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionFlags {
    /// A fixed format is selected, or a custom format has validated.
    pub format: bool,
    /// The last manuscript validation succeeded and was not removed.
    pub content: bool,
    /// The last cover upload succeeded and was not removed.
    pub cover: bool,
    /// `selling_price >= minimum_price > 0`.
    pub pricing: bool,
    /// Supplied by the author-assignment collaborator.
    pub authors: bool,
}

impl SectionFlags {
    /// All five sections complete.
    pub const fn is_complete(&self) -> bool {
        self.format && self.content && self.cover && self.pricing && self.authors
    }
}

/// One entry in the append-only status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusChange {
    pub status: EditionStatus,
    #[ts(as = "String")]
    pub changed_at: DateTime<Utc>,
}

/// The externally observable completion state of an edition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EditionCompleteness {
    pub flags: SectionFlags,
    pub status: EditionStatus,
}

impl EditionCompleteness {
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.flags.is_complete()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_matching_with_tolerance() {
        let a5 = FormatEnvelope {
            width_mm: 148.0,
            height_mm: 210.0,
        };

        // Exact match
        assert!(a5.matches(PageDimensions {
            width_mm: 148.0,
            height_mm: 210.0
        }));
        // Within ±1 mm on both axes
        assert!(a5.matches(PageDimensions {
            width_mm: 148.9,
            height_mm: 209.1
        }));
        // One axis out is a mismatch, even if the other is exact
        assert!(!a5.matches(PageDimensions {
            width_mm: 148.0,
            height_mm: 212.0
        }));
        assert!(!a5.matches(PageDimensions {
            width_mm: 146.5,
            height_mm: 210.0
        }));
    }

    #[test]
    fn test_custom_spec_envelope_converts_cm_to_mm() {
        let spec = CustomFormatSpec::new(14.8, 21.0);
        let envelope = spec.envelope();
        assert!((envelope.width_mm - 148.0).abs() < f64::EPSILON);
        assert!((envelope.height_mm - 210.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_paper_prices_are_ordered() {
        // Photo paper is the premium option; cream sits above white.
        assert!(PaperType::TextdruckWeiss.price_per_page() < PaperType::TextdruckCreme.price_per_page());
        assert!(PaperType::TextdruckCreme.price_per_page() < PaperType::Fotodruck.price_per_page());
    }

    #[test]
    fn test_option_keys_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&PaperType::TextdruckWeiss).unwrap(),
            "\"textdruck-weiss\""
        );
        assert_eq!(serde_json::to_string(&SpineType::Gerade).unwrap(), "\"gerade\"");
    }

    #[test]
    fn test_content_asset_empty_state() {
        let asset = ContentAsset::empty();
        assert!(asset.is_empty());
        assert_eq!(asset.page_count, 0);
        assert!(asset.dimensions.is_none());
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = CostBreakdown {
            paper: Money::from_cents(500),
            cover_finish: Money::from_cents(50),
            spine: Money::zero(),
            color_pages: Money::from_cents(30),
            format: Money::zero(),
        };
        assert_eq!(breakdown.total().cents(), 580);
    }

    #[test]
    fn test_status_default_is_draft() {
        assert_eq!(EditionStatus::default(), EditionStatus::Draft);
    }
}
