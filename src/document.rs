//! Document model: text runs and the extraction-adapter boundary.
//!
//! PDF parsing and rendering are owned by an external library (pdf.js in the
//! browser, pdfium on desktop). This crate sees a loaded document only
//! through the [`DocumentSource`] trait: a page count, per-page native sizes,
//! and per-page ordered [`TextRun`]s. Adapters wrap the real renderer;
//! [`InMemoryDocument`] backs tests, fixtures, and headless tools.

use crate::error::{Error, Result};
use crate::viewport::PageSize;
use serde::{Deserialize, Serialize};

/// A contiguous span of extracted text sharing one position transform, as
/// reported by the document's text-extraction layer.
///
/// Coordinates are page user-space. `origin_x`/`origin_y` is the run's
/// baseline origin; `width_axis_x`/`width_axis_y` is the run's vertical text
/// axis, whose magnitude serves as the glyph height (there is no explicit
/// font-size field in extracted text metadata). `rendered_width` is the run's
/// actual rendered width in user-space units and is authoritative over any
/// estimate derived from reference-font measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Text content of the run
    pub text: String,
    /// X coordinate of the baseline origin
    pub origin_x: f64,
    /// Y coordinate of the baseline origin
    pub origin_y: f64,
    /// X component of the vertical text axis
    pub width_axis_x: f64,
    /// Y component of the vertical text axis
    pub width_axis_y: f64,
    /// Rendered width of the whole run in user-space units
    pub rendered_width: f64,
}

impl TextRun {
    /// Create a run with an explicit axis vector.
    pub fn new(
        text: impl Into<String>,
        origin_x: f64,
        origin_y: f64,
        width_axis_x: f64,
        width_axis_y: f64,
        rendered_width: f64,
    ) -> Self {
        Self {
            text: text.into(),
            origin_x,
            origin_y,
            width_axis_x,
            width_axis_y,
            rendered_width,
        }
    }

    /// Create an unrotated horizontal run: the axis vector is `(0, font_size)`,
    /// so [`glyph_height`](Self::glyph_height) equals `font_size`.
    pub fn horizontal(
        text: impl Into<String>,
        origin_x: f64,
        origin_y: f64,
        font_size: f64,
        rendered_width: f64,
    ) -> Self {
        Self::new(text, origin_x, origin_y, 0.0, font_size, rendered_width)
    }

    /// Glyph height of the run: the magnitude of the vertical text axis,
    /// used as the line-height proxy when building highlight rectangles.
    pub fn glyph_height(&self) -> f64 {
        (self.width_axis_x * self.width_axis_x + self.width_axis_y * self.width_axis_y).sqrt()
    }
}

/// Read access to a loaded document, as exposed by the external rendering
/// library's text-extraction layer.
///
/// Page numbers are 1-based throughout, matching PDF convention. An
/// implementation whose backing document has gone away returns
/// [`Error::DocumentUnavailable`]; a search pass receiving that condition
/// no-ops silently instead of failing.
///
/// Methods take `&self`; adapters that cache behind the boundary use
/// interior mutability.
pub trait DocumentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> Result<usize>;

    /// Native size of a page in user-space units at scale 1.
    fn page_size(&self, page: u32) -> Result<PageSize>;

    /// Ordered text runs of a page. A failure here is scoped to the one
    /// page: callers skip it and continue with the rest of the document.
    fn text_runs(&self, page: u32) -> Result<Vec<TextRun>>;
}

/// One page of an [`InMemoryDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InMemoryPage {
    /// Native page size at scale 1
    pub size: PageSize,
    /// Ordered text runs on the page
    pub runs: Vec<TextRun>,
}

/// A document held entirely in memory.
///
/// Serves as the fixture format for tests and the search preview tool, and
/// as a ready-made [`DocumentSource`] for shells that extract all text up
/// front. Deserializes from JSON:
///
/// ```json
/// {
///   "pages": [
///     {
///       "size": { "width": 612.0, "height": 792.0 },
///       "runs": [
///         { "text": "Hello World", "origin_x": 72.0, "origin_y": 700.0,
///           "width_axis_x": 0.0, "width_axis_y": 12.0, "rendered_width": 66.0 }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryDocument {
    /// Pages in document order
    pub pages: Vec<InMemoryPage>,
}

impl InMemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page and return `self` for chaining.
    pub fn with_page(mut self, size: PageSize, runs: Vec<TextRun>) -> Self {
        self.pages.push(InMemoryPage { size, runs });
        self
    }

    fn page(&self, page: u32) -> Result<&InMemoryPage> {
        if page == 0 {
            return Err(Error::PageOutOfBounds {
                page,
                page_count: self.pages.len(),
            });
        }
        self.pages
            .get(page as usize - 1)
            .ok_or(Error::PageOutOfBounds {
                page,
                page_count: self.pages.len(),
            })
    }
}

impl DocumentSource for InMemoryDocument {
    fn page_count(&self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn page_size(&self, page: u32) -> Result<PageSize> {
        Ok(self.page(page)?.size)
    }

    fn text_runs(&self, page: u32) -> Result<Vec<TextRun>> {
        Ok(self.page(page)?.runs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_height_horizontal() {
        let run = TextRun::horizontal("abc", 10.0, 20.0, 12.0, 30.0);
        assert_eq!(run.glyph_height(), 12.0);
        assert_eq!(run.width_axis_x, 0.0);
        assert_eq!(run.width_axis_y, 12.0);
    }

    #[test]
    fn test_glyph_height_rotated_axis() {
        let run = TextRun::new("abc", 0.0, 0.0, 3.0, 4.0, 30.0);
        assert_eq!(run.glyph_height(), 5.0);
    }

    #[test]
    fn test_in_memory_document_pages() {
        let doc = InMemoryDocument::new()
            .with_page(
                PageSize::new(612.0, 792.0),
                vec![TextRun::horizontal("first", 0.0, 0.0, 12.0, 25.0)],
            )
            .with_page(PageSize::new(612.0, 792.0), vec![]);

        assert_eq!(doc.page_count().unwrap(), 2);
        assert_eq!(doc.page_size(1).unwrap().width, 612.0);
        assert_eq!(doc.text_runs(1).unwrap().len(), 1);
        assert!(doc.text_runs(2).unwrap().is_empty());
    }

    #[test]
    fn test_in_memory_document_page_bounds() {
        let doc = InMemoryDocument::new().with_page(PageSize::new(100.0, 100.0), vec![]);

        assert!(matches!(
            doc.page_size(0),
            Err(Error::PageOutOfBounds { page: 0, .. })
        ));
        assert!(matches!(
            doc.text_runs(2),
            Err(Error::PageOutOfBounds {
                page: 2,
                page_count: 1
            })
        ));
    }

    #[test]
    fn test_fixture_round_trips_through_json() {
        let doc = InMemoryDocument::new().with_page(
            PageSize::new(200.0, 100.0),
            vec![TextRun::horizontal("Hello World", 10.0, 50.0, 12.0, 100.0)],
        );
        let json = serde_json::to_string(&doc).unwrap();
        let back: InMemoryDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
