//! # Error Types
//!
//! Domain-specific error types for folio-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  folio-core errors (this file)                                         │
//! │  ├── CoreError        - Contract-level failures (unknown format key)   │
//! │  └── ValidationError  - User input failures (field-level, recoverable) │
//! │                                                                         │
//! │  folio-content errors (separate crate)                                 │
//! │  └── ContentError     - File inspection failures (io, pdf parsing)     │
//! │                                                                         │
//! │  Undefined states are NOT errors:                                      │
//! │  ├── minimum price before content upload  → Money::zero()              │
//! │  └── commission before a valid minimum    → CommissionOutcome::        │
//! │                                             NotApplicable              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, violated bound)
//! 3. Errors are enum variants, never String
//! 4. User input problems never abort the surrounding form: the caller
//!    surfaces the latest message until a new attempt supersedes it

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Contract-level errors.
///
/// These indicate a programming or configuration error upstream, not a user
/// mistake. They must never be reachable through normal UI interaction.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A format key does not exist in the catalog.
    ///
    /// ## When This Occurs
    /// The format picker and the catalog drifted out of sync. The closed
    /// print-option enums make the equivalent drift for paper, cover and
    /// spine options a compile-time error instead.
    #[error("Unknown book format: {0}")]
    UnknownFormat(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// User input validation errors.
///
/// Always recoverable: the form stays usable and the user can retry the
/// field. The message names the field and, for bounds violations, the
/// specific bound that was crossed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The field could not be parsed as a decimal number.
    /// Both comma and dot decimal separators are accepted before parsing.
    #[error("{field} is not a valid number")]
    InvalidNumber { field: String },

    /// The value is below the minimum the print shop can produce.
    #[error("{field} must be at least {min} cm")]
    BelowMinimum { field: String, min: f64 },

    /// The value is above the maximum the print shop can produce.
    #[error("{field} must be at most {max} cm")]
    AboveMaximum { field: String, max: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownFormat("folio-maximo".to_string());
        assert_eq!(err.to_string(), "Unknown book format: folio-maximo");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidNumber {
            field: "width".to_string(),
        };
        assert_eq!(err.to_string(), "width is not a valid number");

        let err = ValidationError::BelowMinimum {
            field: "width".to_string(),
            min: 10.8,
        };
        assert_eq!(err.to_string(), "width must be at least 10.8 cm");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::AboveMaximum {
            field: "height".to_string(),
            max: 29.7,
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
