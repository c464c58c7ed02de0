//! # Edition Configuration State
//!
//! One value owns everything configurable about an edition, with a single
//! recompute entry point.
//!
//! ## Why Explicit State?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     The Recompute Pass                                  │
//! │                                                                         │
//! │  any mutation (format, paper, upload result, price, …)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  recompute()          ← ONE atomic pass, fixed order                    │
//! │       │                                                                 │
//! │       ├── 1. CostBreakdown + minimum price                              │
//! │       ├── 2. PriceState (selling price clamped UP to the new floor)     │
//! │       ├── 3. CommissionOutcome                                          │
//! │       └── 4. EditionCompleteness (flags + automatic status)             │
//! │                                                                         │
//! │  An observer can never see a raised minimum next to a stale,            │
//! │  now-too-low selling price: both change inside the same pass.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Each edition's configuration is owned exclusively by the session
//! handling it. There is no shared mutable state in this core and no
//! locking: the surrounding application decides how sessions are held.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::FormatCatalog;
use crate::commission::compute_commission;
use crate::completeness::CompletenessTracker;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::compute_minimum_price;
use crate::types::{
    CommissionOutcome, ContentAsset, ContentCheck, CostBreakdown, CoverFinish, CustomFormatSpec,
    EditionCompleteness, EditionStatus, FormatEnvelope, PaperType, PriceState,
    PrintOptionSelection, SectionFlags, SpineType, StatusChange,
};
use crate::validation::validate_custom_format;

// =============================================================================
// Edition Record (persistence contract)
// =============================================================================

/// The externally observable edition record, handed to the out-of-scope
/// record store after each recompute pass. `status_history` only ever
/// grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EditionRecord {
    pub edition_id: String,
    pub completeness: EditionCompleteness,
    pub status_history: Vec<StatusChange>,
    pub price: PriceState,
    pub breakdown: CostBreakdown,
    pub commission: CommissionOutcome,
}

// =============================================================================
// Edition Configuration State
// =============================================================================

/// The full configuration state of one edition, owned by one session.
///
/// Every mutator ends in [`EditionConfigurationState::recompute`], so the
/// derived values (breakdown, prices, commission, completeness) are always
/// consistent with the inputs.
#[derive(Debug, Clone)]
pub struct EditionConfigurationState {
    edition_id: String,
    selection: PrintOptionSelection,
    custom_format: Option<CustomFormatSpec>,
    content: ContentAsset,
    /// 1-based page numbers the author marked for color print.
    color_pages: BTreeSet<u32>,
    cover_uploaded: bool,
    authors_complete: bool,
    /// Policy parameter from configuration, whole percent.
    base_commission_pct: u32,
    /// Monotonic counter for in-flight manuscript validations. Only the
    /// result of the most recently initiated attempt may be applied.
    content_attempt: u64,

    // Derived by recompute(), in this order:
    breakdown: CostBreakdown,
    price: PriceState,
    commission: CommissionOutcome,
    tracker: CompletenessTracker,
}

impl EditionConfigurationState {
    /// A fresh edition with default print options (A5, white text paper,
    /// matt cover, straight spine) and nothing uploaded.
    pub fn new(base_commission_pct: u32) -> Self {
        let mut state = EditionConfigurationState {
            edition_id: Uuid::new_v4().to_string(),
            selection: PrintOptionSelection {
                format_key: "a5".to_string(),
                paper_type: PaperType::TextdruckWeiss,
                cover_finish: CoverFinish::Matt,
                spine_type: SpineType::Gerade,
            },
            custom_format: None,
            content: ContentAsset::empty(),
            color_pages: BTreeSet::new(),
            cover_uploaded: false,
            authors_complete: false,
            base_commission_pct,
            content_attempt: 0,
            breakdown: CostBreakdown::zero(),
            price: PriceState::default(),
            commission: CommissionOutcome::NotApplicable,
            tracker: CompletenessTracker::new(),
        };
        state.recompute();
        state
    }

    // -------------------------------------------------------------------------
    // Format & print options
    // -------------------------------------------------------------------------

    /// Selects a catalog format by key. Fails only on a key the picker
    /// never offers (contract violation upstream).
    pub fn select_format(&mut self, key: &str) -> CoreResult<()> {
        let format = FormatCatalog::lookup(key)?;
        self.selection.format_key = format.key.to_string();
        self.recompute();
        Ok(())
    }

    /// Validates and stores custom trim dimensions (raw form strings, cm).
    ///
    /// On failure the previous spec is discarded: an edition with invalid
    /// custom dimensions is not usable for upload until corrected, and the
    /// caller keeps the returned error visible until the next attempt.
    pub fn set_custom_format(
        &mut self,
        width_raw: &str,
        height_raw: &str,
    ) -> Result<(), ValidationError> {
        match validate_custom_format(width_raw, height_raw) {
            Ok(spec) => {
                self.custom_format = Some(spec);
                self.recompute();
                Ok(())
            }
            Err(err) => {
                self.custom_format = None;
                self.recompute();
                Err(err)
            }
        }
    }

    pub fn set_paper_type(&mut self, paper: PaperType) {
        self.selection.paper_type = paper;
        self.recompute();
    }

    pub fn set_cover_finish(&mut self, finish: CoverFinish) {
        self.selection.cover_finish = finish;
        self.recompute();
    }

    pub fn set_spine_type(&mut self, spine: SpineType) {
        self.selection.spine_type = spine;
        self.recompute();
    }

    /// Replaces the set of 1-based page numbers marked for color print.
    /// Pages beyond the current page count are kept but not charged.
    pub fn set_color_pages(&mut self, pages: BTreeSet<u32>) {
        self.color_pages = pages;
        self.recompute();
    }

    /// Whether the custom surcharge and the custom envelope apply.
    pub fn custom_format_active(&self) -> bool {
        self.selected_format_is_custom() && self.custom_format.is_some()
    }

    fn selected_format_is_custom(&self) -> bool {
        FormatCatalog::lookup(&self.selection.format_key)
            .map(|f| f.is_custom())
            .unwrap_or(false)
    }

    /// The envelope an uploaded manuscript must match right now: fixed
    /// catalog dimensions, or the last-validated custom spec. `None` while
    /// the custom format is selected but not yet validly specified.
    pub fn expected_envelope(&self) -> Option<FormatEnvelope> {
        let format = FormatCatalog::lookup(&self.selection.format_key).ok()?;
        if format.is_custom() {
            self.custom_format.as_ref().map(|spec| spec.envelope())
        } else {
            format.envelope()
        }
    }

    // -------------------------------------------------------------------------
    // Content & cover
    // -------------------------------------------------------------------------

    /// Starts a manuscript validation attempt and returns its number.
    ///
    /// Starting a new upload while one is in flight is allowed; the older
    /// attempt's result becomes stale and will be ignored on arrival.
    pub fn begin_content_validation(&mut self) -> u64 {
        self.content_attempt += 1;
        self.content_attempt
    }

    /// Commits the result of a validation attempt.
    ///
    /// Returns `false` without touching any state when the attempt is not
    /// the most recently initiated one (stale result) — the caller simply
    /// drops it. A failed check leaves the previously accepted asset in
    /// place so the user can retry with a corrected file.
    pub fn apply_content_result(
        &mut self,
        attempt: u64,
        file_name: &str,
        check: &ContentCheck,
    ) -> bool {
        if attempt != self.content_attempt {
            return false;
        }

        if check.valid {
            self.content = ContentAsset {
                file_name: Some(file_name.to_string()),
                page_count: check.pages,
                dimensions: check.dimensions,
            };
        }

        self.recompute();
        true
    }

    /// Removes the uploaded manuscript. Color page marks go with it.
    pub fn remove_content(&mut self) {
        self.content = ContentAsset::empty();
        self.color_pages.clear();
        self.recompute();
    }

    /// Records the outcome of the latest cover upload.
    pub fn set_cover_uploaded(&mut self, uploaded: bool) {
        self.cover_uploaded = uploaded;
        self.recompute();
    }

    // -------------------------------------------------------------------------
    // Pricing & authors
    // -------------------------------------------------------------------------

    /// Sets the selling price and returns the effective value, which is
    /// clamped up to the minimum price whenever one is defined.
    pub fn set_selling_price(&mut self, price: Money) -> Money {
        self.price.selling_price = price.max(Money::zero());
        self.recompute();
        self.price.selling_price
    }

    /// Supplied by the author-assignment collaborator.
    pub fn set_authors_complete(&mut self, complete: bool) {
        self.authors_complete = complete;
        self.recompute();
    }

    /// Manual lifecycle transition from an external actor.
    pub fn set_status(&mut self, status: EditionStatus) {
        self.tracker.set_status(status);
    }

    // -------------------------------------------------------------------------
    // The recompute pass
    // -------------------------------------------------------------------------

    /// Re-derives breakdown → prices → commission → completeness, in that
    /// fixed order, as one atomic pass.
    fn recompute(&mut self) {
        // Only pages that exist get the color surcharge.
        let color_count = self
            .color_pages
            .iter()
            .filter(|&&p| p >= 1 && p <= self.content.page_count)
            .count() as u32;

        // 1. Cost breakdown and minimum price
        let minimum = compute_minimum_price(
            self.content.page_count,
            color_count,
            self.selection.paper_type,
            self.selection.cover_finish,
            self.selection.spine_type,
            self.custom_format_active(),
        );
        self.breakdown = minimum.breakdown;
        self.price.minimum_price = minimum.minimum_price;

        // 2. Price floor: a raised minimum clamps the selling price up,
        //    never silently leaves a stale too-low price behind
        if self.price.minimum_price.is_positive() {
            self.price.selling_price = self.price.selling_price.max(self.price.minimum_price);
        }

        // 3. Commission split
        self.commission = compute_commission(
            self.price.selling_price,
            self.price.minimum_price,
            self.base_commission_pct,
        );

        // 4. Completeness flags and automatic status
        let flags = SectionFlags {
            format: !self.selected_format_is_custom() || self.custom_format.is_some(),
            content: !self.content.is_empty(),
            cover: self.cover_uploaded,
            pricing: self.price.minimum_price.is_positive()
                && self.price.selling_price >= self.price.minimum_price,
            authors: self.authors_complete,
        };
        self.tracker.apply(flags);
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    #[inline]
    pub fn edition_id(&self) -> &str {
        &self.edition_id
    }

    #[inline]
    pub fn selection(&self) -> &PrintOptionSelection {
        &self.selection
    }

    #[inline]
    pub fn custom_format(&self) -> Option<&CustomFormatSpec> {
        self.custom_format.as_ref()
    }

    #[inline]
    pub fn content(&self) -> &ContentAsset {
        &self.content
    }

    #[inline]
    pub fn breakdown(&self) -> &CostBreakdown {
        &self.breakdown
    }

    #[inline]
    pub fn price(&self) -> &PriceState {
        &self.price
    }

    #[inline]
    pub fn commission(&self) -> &CommissionOutcome {
        &self.commission
    }

    #[inline]
    pub fn completeness(&self) -> &EditionCompleteness {
        self.tracker.completeness()
    }

    /// Snapshot for the external edition-record store.
    pub fn record(&self) -> EditionRecord {
        EditionRecord {
            edition_id: self.edition_id.clone(),
            completeness: *self.tracker.completeness(),
            status_history: self.tracker.history().to_vec(),
            price: self.price,
            breakdown: self.breakdown,
            commission: self.commission,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
