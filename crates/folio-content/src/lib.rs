//! # folio-content: Manuscript Inspection for FolioPress
//!
//! This crate owns the single suspending operation of the edition
//! configuration core: reading an uploaded manuscript file, measuring its
//! page count and physical page size, and validating the measurement
//! against the expected format envelope.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Upload transport (out of scope)                         │
//! │                         │  file path                                    │
//! │                         ▼                                               │
//! │   validate_manuscript(path, envelope)  ← async, THIS CRATE             │
//! │                         │                                               │
//! │                         ▼                                               │
//! │   ContentCheck { valid, pages, dimensions, issue }                      │
//! │                         │                                               │
//! │                         ▼                                               │
//! │   EditionConfigurationState::apply_content_result  (folio-core)        │
//! │                                                                         │
//! │   Expected failures (unreadable file, wrong trim size, zero pages)      │
//! │   are DATA in the check, never Err: the author retries with a           │
//! │   corrected file without losing any other edition state.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stale-result handling is the caller's job: `folio-core` hands out an
//! attempt number per validation and ignores results from superseded
//! attempts, so starting a new upload while one is in flight is safe.

pub mod error;
pub mod inspect;

pub use error::{ContentError, Result};
pub use inspect::{load_manuscript, measure, validate_manuscript, Measurement};
