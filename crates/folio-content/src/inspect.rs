//! Loading and measuring uploaded manuscripts.
//!
//! A manuscript is inspected structurally only: page count from the page
//! tree, physical size from the first page's MediaBox. Nothing is
//! rendered.
//!
//! ## Tolerance
//! PDF page boxes are specified in points (1 pt = 25.4/72 mm), so a
//! nominally 148 mm page rarely measures exactly 148.0 after conversion.
//! Matching uses the symmetric ±1 mm tolerance defined in
//! `folio_core::DIMENSION_TOLERANCE_MM`.

use std::path::Path;

use lopdf::{Document, Object, ObjectId};
use tracing::{debug, warn};

use folio_core::types::{ContentCheck, ContentIssue, FormatEnvelope, PageDimensions};

use crate::error::Result;

/// Millimeters per PDF point.
const MM_PER_POINT: f64 = 25.4 / 72.0;

// =============================================================================
// Loading & Measuring
// =============================================================================

/// Loads a manuscript PDF.
///
/// The file is read asynchronously; parsing is CPU-bound and runs on the
/// blocking pool so it does not stall the runtime.
pub async fn load_manuscript(path: impl AsRef<Path>) -> Result<Document> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// What inspection extracts from a manuscript.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Detected page count.
    pub pages: u32,
    /// First page's trim size in millimeters, if it carries a usable
    /// MediaBox.
    pub dimensions: Option<PageDimensions>,
}

/// Measures a loaded manuscript: page count and first-page dimensions.
pub fn measure(doc: &Document) -> Measurement {
    let pages = doc.get_pages();
    let dimensions = pages
        .values()
        .next()
        .and_then(|&page_id| page_dimensions(doc, page_id));

    Measurement {
        pages: pages.len() as u32,
        dimensions,
    }
}

/// Reads a page's MediaBox and converts it to millimeters.
fn page_dimensions(doc: &Document, page_id: ObjectId) -> Option<PageDimensions> {
    let page_dict = doc.get_dictionary(page_id).ok()?;
    let media_box = page_dict.get(b"MediaBox").and_then(|obj| obj.as_array()).ok()?;

    if media_box.len() < 4 {
        return None;
    }

    // MediaBox is [x0 y0 x1 y1] in points
    let x0 = extract_number(&media_box[0])?;
    let y0 = extract_number(&media_box[1])?;
    let x1 = extract_number(&media_box[2])?;
    let y1 = extract_number(&media_box[3])?;

    Some(PageDimensions {
        width_mm: (x1 - x0) as f64 * MM_PER_POINT,
        height_mm: (y1 - y0) as f64 * MM_PER_POINT,
    })
}

/// Extract numeric value from a PDF object.
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Validates an uploaded manuscript against the expected format envelope.
///
/// Total for user-level failures: every expected problem (unreadable
/// file, empty document, missing page box, wrong trim size) comes back as
/// a structured [`ContentCheck`] naming the specific check that failed.
/// The caller commits the result through the attempt-number guard in
/// `folio-core`, which discards results of superseded uploads.
pub async fn validate_manuscript(
    path: impl AsRef<Path>,
    expected: FormatEnvelope,
) -> ContentCheck {
    let path = path.as_ref();
    debug!(path = %path.display(), "inspecting manuscript");

    let doc = match load_manuscript(path).await {
        Ok(doc) => doc,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "manuscript unreadable");
            return ContentCheck::failed(0, None, ContentIssue::Unreadable);
        }
    };

    let measurement = measure(&doc);

    if measurement.pages == 0 {
        warn!(path = %path.display(), "manuscript has no pages");
        return ContentCheck::failed(0, None, ContentIssue::NoPages);
    }

    let Some(measured) = measurement.dimensions else {
        warn!(path = %path.display(), "manuscript has no measurable page box");
        return ContentCheck::failed(measurement.pages, None, ContentIssue::NoDimensions);
    };

    if !expected.matches(measured) {
        warn!(
            path = %path.display(),
            measured_w = measured.width_mm,
            measured_h = measured.height_mm,
            expected_w = expected.width_mm,
            expected_h = expected.height_mm,
            "manuscript trim size does not match the selected format"
        );
        return ContentCheck::failed(
            measurement.pages,
            Some(measured),
            ContentIssue::DimensionMismatch { measured, expected },
        );
    }

    debug!(
        path = %path.display(),
        pages = measurement.pages,
        "manuscript accepted"
    );
    ContentCheck::passed(measurement.pages, measured)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Dictionary, Stream};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const A5: FormatEnvelope = FormatEnvelope {
        width_mm: 148.0,
        height_mm: 210.0,
    };

    /// Builds a minimal but structurally valid PDF with `page_count`
    /// pages of the given trim size.
    fn build_pdf(page_count: usize, width_mm: f64, height_mm: f64) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let width_pt = (width_mm / MM_PER_POINT) as f32;
        let height_pt = (height_mm / MM_PER_POINT) as f32;

        let mut kids = Vec::new();
        for _ in 0..page_count {
            let content_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));
            let page_id = doc.add_object(dictionary! {
                "Type" => Object::Name(b"Page".to_vec()),
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(width_pt),
                    Object::Real(height_pt),
                ]),
                "Contents" => Object::Reference(content_id),
                "Resources" => Object::Dictionary(Dictionary::new()),
            });
            kids.push(Object::Reference(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => Object::Name(b"Pages".to_vec()),
                "Count" => Object::Integer(page_count as i64),
                "Kids" => Object::Array(kids),
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => Object::Name(b"Catalog".to_vec()),
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        doc
    }

    fn save_pdf(dir: &TempDir, name: &str, mut doc: Document) -> PathBuf {
        let path = dir.path().join(name);
        doc.save(&path).unwrap();
        path
    }

    #[tokio::test]
    async fn test_valid_a5_manuscript_passes() {
        let dir = TempDir::new().unwrap();
        let path = save_pdf(&dir, "a5.pdf", build_pdf(12, 148.0, 210.0));

        let check = validate_manuscript(&path, A5).await;

        assert!(check.valid, "{:?}", check.issue);
        assert_eq!(check.pages, 12);
        let dims = check.dimensions.unwrap();
        assert!((dims.width_mm - 148.0).abs() <= 1.0);
        assert!((dims.height_mm - 210.0).abs() <= 1.0);
    }

    #[tokio::test]
    async fn test_wrong_trim_size_is_a_dimension_mismatch() {
        let dir = TempDir::new().unwrap();
        // A4 manuscript against an A5 edition
        let path = save_pdf(&dir, "a4.pdf", build_pdf(8, 210.0, 297.0));

        let check = validate_manuscript(&path, A5).await;

        assert!(!check.valid);
        assert_eq!(check.pages, 8); // page count is still reported
        assert!(matches!(check.issue, Some(ContentIssue::DimensionMismatch { .. })));
    }

    #[tokio::test]
    async fn test_empty_document_reports_no_pages() {
        let dir = TempDir::new().unwrap();
        let path = save_pdf(&dir, "empty.pdf", build_pdf(0, 148.0, 210.0));

        let check = validate_manuscript(&path, A5).await;

        assert!(!check.valid);
        assert_eq!(check.pages, 0);
        assert_eq!(check.issue, Some(ContentIssue::NoPages));
    }

    #[tokio::test]
    async fn test_garbage_file_is_unreadable_not_a_panic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        tokio::fs::write(&path, b"this is not a pdf").await.unwrap();

        let check = validate_manuscript(&path, A5).await;

        assert!(!check.valid);
        assert_eq!(check.pages, 0);
        assert_eq!(check.issue, Some(ContentIssue::Unreadable));
    }

    #[tokio::test]
    async fn test_missing_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let check = validate_manuscript(dir.path().join("nope.pdf"), A5).await;
        assert_eq!(check.issue, Some(ContentIssue::Unreadable));
    }

    #[test]
    fn test_point_conversion_round_trips_within_tolerance() {
        // The f32 MediaBox round trip must stay inside the matching
        // tolerance for every catalog size
        for (w, h) in [(105.0, 148.0), (148.0, 210.0), (210.0, 297.0), (120.0, 190.0)] {
            let doc = build_pdf(1, w, h);
            let measurement = measure(&doc);
            let dims = measurement.dimensions.unwrap();
            assert!((dims.width_mm - w).abs() < 0.1, "{w}x{h}");
            assert!((dims.height_mm - h).abs() < 0.1, "{w}x{h}");
        }
    }
}
