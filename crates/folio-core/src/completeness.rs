//! # Completeness Tracker
//!
//! A small state machine over per-section completion flags and the edition
//! lifecycle status.
//!
//! ## Status Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Edition Lifecycle                                   │
//! │                                                                         │
//! │            content ∧ cover complete                                     │
//! │   Draft ──────────────────────────────► Ready        (AUTOMATIC, once)  │
//! │                                                                         │
//! │   InReview / NeedsRevision / Published   (MANUAL, external actor only)  │
//! │                                                                         │
//! │   Rules:                                                                │
//! │   - the automatic transition fires exactly when status is Draft and    │
//! │     both flags hold; it never fires from any other status              │
//! │   - flag recomputation NEVER regresses a status: removing content      │
//! │     from a Ready edition clears the flag, not the status               │
//! │   - history records actual changes only, no self-transitions           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;

use crate::types::{EditionCompleteness, EditionStatus, SectionFlags, StatusChange};

/// Tracks an edition's completion flags, lifecycle status and the
/// append-only status history.
#[derive(Debug, Clone)]
pub struct CompletenessTracker {
    completeness: EditionCompleteness,
    history: Vec<StatusChange>,
}

impl CompletenessTracker {
    /// A fresh tracker in `Draft` with the initial history entry.
    pub fn new() -> Self {
        CompletenessTracker {
            completeness: EditionCompleteness::default(),
            history: vec![StatusChange {
                status: EditionStatus::Draft,
                changed_at: Utc::now(),
            }],
        }
    }

    /// Applies a recomputed set of section flags.
    ///
    /// The only automatic status transition happens here: `Draft → Ready`
    /// when content and cover both complete. Re-applying identical flags
    /// changes nothing and appends nothing.
    pub fn apply(&mut self, flags: SectionFlags) -> &EditionCompleteness {
        self.completeness.flags = flags;

        if self.completeness.status == EditionStatus::Draft && flags.content && flags.cover {
            self.transition(EditionStatus::Ready);
        }

        &self.completeness
    }

    /// Applies a manual status transition from an external actor
    /// (reviewer, publishing pipeline). Self-transitions are ignored.
    pub fn set_status(&mut self, status: EditionStatus) -> &EditionCompleteness {
        if status != self.completeness.status {
            self.transition(status);
        }
        &self.completeness
    }

    fn transition(&mut self, status: EditionStatus) {
        self.completeness.status = status;
        self.history.push(StatusChange {
            status,
            changed_at: Utc::now(),
        });
    }

    /// The current completeness record.
    #[inline]
    pub fn completeness(&self) -> &EditionCompleteness {
        &self.completeness
    }

    /// The append-only status history, oldest first.
    #[inline]
    pub fn history(&self) -> &[StatusChange] {
        &self.history
    }
}

impl Default for CompletenessTracker {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(content: bool, cover: bool) -> SectionFlags {
        SectionFlags {
            format: true,
            content,
            cover,
            pricing: false,
            authors: false,
        }
    }

    #[test]
    fn test_starts_in_draft_with_initial_history_entry() {
        let tracker = CompletenessTracker::new();
        assert_eq!(tracker.completeness().status, EditionStatus::Draft);
        assert_eq!(tracker.history().len(), 1);
        assert_eq!(tracker.history()[0].status, EditionStatus::Draft);
    }

    #[test]
    fn test_auto_advance_draft_to_ready_exactly_once() {
        let mut tracker = CompletenessTracker::new();

        // One flag alone does nothing
        tracker.apply(flags(true, false));
        assert_eq!(tracker.completeness().status, EditionStatus::Draft);

        // Both flags: exactly one new history entry
        tracker.apply(flags(true, true));
        assert_eq!(tracker.completeness().status, EditionStatus::Ready);
        assert_eq!(tracker.history().len(), 2);

        // Re-applying the same flags appends nothing further
        tracker.apply(flags(true, true));
        assert_eq!(tracker.history().len(), 2);
    }

    #[test]
    fn test_no_auto_regression() {
        let mut tracker = CompletenessTracker::new();
        tracker.apply(flags(true, true));
        assert_eq!(tracker.completeness().status, EditionStatus::Ready);

        // Removing content clears the flag but never the status
        tracker.apply(flags(false, true));
        assert_eq!(tracker.completeness().status, EditionStatus::Ready);
        assert!(!tracker.completeness().flags.content);
        assert_eq!(tracker.history().len(), 2);
    }

    #[test]
    fn test_manual_status_preserved_across_recomputation() {
        let mut tracker = CompletenessTracker::new();
        tracker.set_status(EditionStatus::InReview);
        assert_eq!(tracker.history().len(), 2);

        // Flags completing while InReview must NOT trigger the Draft→Ready
        // automatic transition
        tracker.apply(flags(true, true));
        assert_eq!(tracker.completeness().status, EditionStatus::InReview);
        assert_eq!(tracker.history().len(), 2);

        tracker.set_status(EditionStatus::Published);
        assert_eq!(tracker.completeness().status, EditionStatus::Published);
        assert_eq!(tracker.history().len(), 3);
    }

    #[test]
    fn test_manual_self_transition_not_recorded() {
        let mut tracker = CompletenessTracker::new();
        tracker.set_status(EditionStatus::InReview);
        tracker.set_status(EditionStatus::InReview);
        assert_eq!(tracker.history().len(), 2);
    }

    #[test]
    fn test_is_complete_requires_all_flags() {
        let mut tracker = CompletenessTracker::new();
        let all = SectionFlags {
            format: true,
            content: true,
            cover: true,
            pricing: true,
            authors: true,
        };
        assert!(tracker.apply(all).is_complete());

        let mut missing_authors = all;
        missing_authors.authors = false;
        assert!(!tracker.apply(missing_authors).is_complete());
    }
}
