//! # Format Catalog
//!
//! The static table of physical book formats an edition can be printed in.
//!
//! Pure data plus lookup: loaded once at process start (it is a `const`
//! table), immutable, and never the source of a user-facing error — the
//! picker only ever offers keys that exist, so a miss is a contract
//! violation reported as [`CoreError::UnknownFormat`].

use crate::error::{CoreError, CoreResult};
use crate::types::{BookFormat, CustomBounds, TrimSize};
use crate::{CUSTOM_HEIGHT_MAX_CM, CUSTOM_HEIGHT_MIN_CM, CUSTOM_WIDTH_MAX_CM, CUSTOM_WIDTH_MIN_CM};

/// Catalog key of the single custom entry.
pub const CUSTOM_FORMAT_KEY: &str = "custom";

const CUSTOM_BOUNDS: CustomBounds = CustomBounds {
    min_width_cm: CUSTOM_WIDTH_MIN_CM,
    max_width_cm: CUSTOM_WIDTH_MAX_CM,
    min_height_cm: CUSTOM_HEIGHT_MIN_CM,
    max_height_cm: CUSTOM_HEIGHT_MAX_CM,
};

/// All formats the print shop produces. Exactly one entry is custom.
const FORMATS: &[BookFormat] = &[
    BookFormat {
        key: "12x19",
        name: "Taschenbuch 12 × 19",
        trim: TrimSize::Fixed { width_mm: 120.0, height_mm: 190.0 },
    },
    BookFormat {
        key: "13.5x21.5",
        name: "Roman 13,5 × 21,5",
        trim: TrimSize::Fixed { width_mm: 135.0, height_mm: 215.0 },
    },
    BookFormat {
        key: "a5",
        name: "DIN A5",
        trim: TrimSize::Fixed { width_mm: 148.0, height_mm: 210.0 },
    },
    BookFormat {
        key: "17x22",
        name: "Sachbuch 17 × 22",
        trim: TrimSize::Fixed { width_mm: 170.0, height_mm: 220.0 },
    },
    BookFormat {
        key: "a4",
        name: "DIN A4",
        trim: TrimSize::Fixed { width_mm: 210.0, height_mm: 297.0 },
    },
    BookFormat {
        key: "a6",
        name: "DIN A6",
        trim: TrimSize::Fixed { width_mm: 105.0, height_mm: 148.0 },
    },
    BookFormat {
        key: "21x21",
        name: "Quadrat 21 × 21",
        trim: TrimSize::Fixed { width_mm: 210.0, height_mm: 210.0 },
    },
    BookFormat {
        key: CUSTOM_FORMAT_KEY,
        name: "Wunschformat",
        trim: TrimSize::Custom { bounds: CUSTOM_BOUNDS },
    },
];

/// Read-only access to the format table.
pub struct FormatCatalog;

impl FormatCatalog {
    /// Looks up a format by key, ASCII case-insensitively.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::catalog::FormatCatalog;
    ///
    /// let a5 = FormatCatalog::lookup("A5").unwrap();
    /// assert!(!a5.is_custom());
    /// assert!(FormatCatalog::lookup("folio-maximo").is_err());
    /// ```
    pub fn lookup(key: &str) -> CoreResult<&'static BookFormat> {
        FORMATS
            .iter()
            .find(|f| f.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| CoreError::UnknownFormat(key.to_string()))
    }

    /// All formats, in picker order.
    pub fn formats() -> impl Iterator<Item = &'static BookFormat> {
        FORMATS.iter()
    }

    /// The single custom entry.
    pub fn custom() -> &'static BookFormat {
        // The table is a const; the custom entry is always present.
        FORMATS
            .iter()
            .find(|f| f.is_custom())
            .expect("catalog contains a custom format")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_format() {
        let a5 = FormatCatalog::lookup("a5").unwrap();
        assert_eq!(a5.name, "DIN A5");
        let envelope = a5.envelope().unwrap();
        assert_eq!(envelope.width_mm, 148.0);
        assert_eq!(envelope.height_mm, 210.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            FormatCatalog::lookup("A5").unwrap().key,
            FormatCatalog::lookup("a5").unwrap().key
        );
    }

    #[test]
    fn test_lookup_unknown_key_fails() {
        assert!(matches!(
            FormatCatalog::lookup("b5"),
            Err(CoreError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_exactly_one_custom_entry() {
        let customs = FormatCatalog::formats().filter(|f| f.is_custom()).count();
        assert_eq!(customs, 1);
        assert_eq!(FormatCatalog::custom().key, CUSTOM_FORMAT_KEY);
        assert!(FormatCatalog::custom().envelope().is_none());
    }

    #[test]
    fn test_fixed_formats_have_positive_dimensions() {
        for format in FormatCatalog::formats().filter(|f| !f.is_custom()) {
            let envelope = format.envelope().unwrap();
            assert!(envelope.width_mm > 0.0, "{}", format.key);
            assert!(envelope.height_mm > 0.0, "{}", format.key);
        }
    }

    #[test]
    fn test_dimension_labels() {
        assert_eq!(FormatCatalog::lookup("a5").unwrap().dimension_label(), "148 × 210 mm");
        assert_eq!(
            FormatCatalog::custom().dimension_label(),
            "10.8–21.0 × 17.0–29.7 cm"
        );
    }
}
