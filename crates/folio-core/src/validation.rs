//! # Custom Format Validation
//!
//! Validates user-supplied custom trim dimensions against the machinery
//! bounds from the catalog's custom entry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types width/height into the custom format form                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_custom_format("14,8", "21.0")  ← THIS MODULE                 │
//! │       │                                                                 │
//! │       ├── not a number?   → InvalidNumber { field }                    │
//! │       ├── below minimum?  → BelowMinimum { field, min }                │
//! │       ├── above maximum?  → AboveMaximum { field, max }                │
//! │       │                                                                 │
//! │       └── OK → CustomFormatSpec (the only way to construct one)        │
//! │                                                                         │
//! │  Stateless and idempotent: same input, same result. The caller keeps   │
//! │  the latest error visible until a new attempt supersedes it.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::CustomFormatSpec;
use crate::{CUSTOM_HEIGHT_MAX_CM, CUSTOM_HEIGHT_MIN_CM, CUSTOM_WIDTH_MAX_CM, CUSTOM_WIDTH_MIN_CM};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates raw width/height strings (in centimeters) and produces the
/// only constructible [`CustomFormatSpec`].
///
/// Accepts both comma and dot as decimal separator, since the portal
/// serves German-locale users.
///
/// ## Example
/// ```rust
/// use folio_core::validation::validate_custom_format;
///
/// assert!(validate_custom_format("14,8", "21.0").is_ok());
/// assert!(validate_custom_format("9.0", "21.0").is_err()); // below 10.8 cm
/// assert!(validate_custom_format("abc", "21.0").is_err());
/// ```
pub fn validate_custom_format(
    width_raw: &str,
    height_raw: &str,
) -> ValidationResult<CustomFormatSpec> {
    let width_cm = parse_dimension("width", width_raw)?;
    check_bounds("width", width_cm, CUSTOM_WIDTH_MIN_CM, CUSTOM_WIDTH_MAX_CM)?;

    let height_cm = parse_dimension("height", height_raw)?;
    check_bounds("height", height_cm, CUSTOM_HEIGHT_MIN_CM, CUSTOM_HEIGHT_MAX_CM)?;

    Ok(CustomFormatSpec::new(width_cm, height_cm))
}

/// Parses one raw dimension field, normalizing the decimal separator.
fn parse_dimension(field: &str, raw: &str) -> ValidationResult<f64> {
    let normalized = raw.trim().replace(',', ".");

    let value: f64 = normalized.parse().map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Checks one dimension against its envelope, naming the violated bound.
fn check_bounds(field: &str, value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if value < min {
        return Err(ValidationError::BelowMinimum {
            field: field.to_string(),
            min,
        });
    }

    if value > max {
        return Err(ValidationError::AboveMaximum {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
