//! Document-wide search with highlight placement.
//!
//! Search runs as a single synchronous pass: parse the query, walk every
//! page of the document, scan each text run, and project the matches into
//! highlight rectangles on the overlay surface. The pass always clears
//! existing overlays before scanning, so stale highlights from a previous
//! query never survive.
//!
//! ## Example
//!
//! ```
//! use pageturn::document::{InMemoryDocument, TextRun};
//! use pageturn::overlay::MemoryOverlays;
//! use pageturn::search::{SearchEngine, SearchOutcome};
//! use pageturn::viewport::PageSize;
//!
//! let doc = InMemoryDocument::new().with_page(
//!     PageSize::new(612.0, 792.0),
//!     vec![TextRun::horizontal("Hello World", 72.0, 700.0, 12.0, 66.0)],
//! );
//! let mut overlays = MemoryOverlays::new();
//! overlays.set_display_size(1, 612.0, 792.0);
//!
//! let engine = SearchEngine::new();
//! match engine.run(&doc, &mut overlays, "world")? {
//!     SearchOutcome::Matches(summary) => {
//!         assert_eq!(summary.page_numbers(), vec![1]);
//!         assert_eq!(overlays.rectangles(1).len(), 1);
//!     }
//!     other => panic!("expected matches, got {other:?}"),
//! }
//! # Ok::<(), pageturn::error::Error>(())
//! ```

mod highlight;
mod scanner;

pub use highlight::{project_match, run_highlights, DEFAULT_PAD_RATIO};
pub use scanner::{Query, RunMatch};

use crate::config::ViewerConfig;
use crate::document::DocumentSource;
use crate::error::{Error, Result};
use crate::metrics::{ReferenceFont, TextMeasurer};
use crate::overlay::OverlaySurface;
use crate::viewport::PageViewport;
use serde::{Deserialize, Serialize};

/// Lifecycle state of the search feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No search is active.
    Idle,
    /// A pass is currently scanning the document.
    Searching,
    /// The last pass found at least one match.
    ResultsShown,
    /// The last pass completed without matches.
    NoResults,
}

/// What a search pass produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query was blank. Overlays were cleared and nothing was scanned.
    Cleared,
    /// No document was available. Overlays were cleared and nothing was
    /// scanned.
    NoDocument,
    /// The whole document was scanned and no page matched.
    NoMatches,
    /// The scan found matches.
    Matches(SearchSummary),
}

/// Match count for a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMatches {
    /// 1-based page number.
    pub page: u32,
    /// Number of matches found on the page.
    pub match_count: usize,
}

/// Per-page results of a completed search pass, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchSummary {
    /// Pages that matched, ascending. Pages with zero matches are omitted.
    pub pages: Vec<PageMatches>,
}

impl SearchSummary {
    /// Page numbers that matched, ascending.
    pub fn page_numbers(&self) -> Vec<u32> {
        self.pages.iter().map(|p| p.page).collect()
    }

    /// Total matches across all pages.
    pub fn total_matches(&self) -> usize {
        self.pages.iter().map(|p| p.match_count).sum()
    }

    /// First page with a match, if any.
    pub fn first_page(&self) -> Option<u32> {
        self.pages.first().map(|p| p.page)
    }

    /// Number of distinct pages with at least one match.
    pub fn matching_page_count(&self) -> usize {
        self.pages.len()
    }

    /// True when no page matched.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Runs search passes against a document and an overlay surface.
///
/// The engine owns the width estimation strategy and the highlight padding
/// ratio. It holds no document state, so one engine can serve any number of
/// passes against any number of documents.
pub struct SearchEngine {
    measurer: Box<dyn TextMeasurer>,
    pad_ratio: f64,
}

impl SearchEngine {
    /// Engine with the reference font measurer and default padding.
    pub fn new() -> Self {
        Self {
            measurer: Box::new(ReferenceFont::default()),
            pad_ratio: DEFAULT_PAD_RATIO,
        }
    }

    /// Engine configured from viewer settings.
    pub fn with_config(config: &ViewerConfig) -> Self {
        Self {
            measurer: Box::new(ReferenceFont::new(config.reference_font_size)),
            pad_ratio: config.highlight_pad_ratio,
        }
    }

    /// Engine with a caller-supplied measurer.
    pub fn with_measurer(measurer: Box<dyn TextMeasurer>, pad_ratio: f64) -> Self {
        Self { measurer, pad_ratio }
    }

    /// Run one search pass over the whole document.
    ///
    /// Existing overlays are cleared before anything else happens, for every
    /// outcome including a blank query. A missing document is not an error:
    /// the pass quietly reports [`SearchOutcome::NoDocument`]. A page whose
    /// text cannot be extracted is logged and skipped; the pass still
    /// completes and reports the remaining pages.
    pub fn run<D, S>(&self, doc: &D, surface: &mut S, raw: &str) -> Result<SearchOutcome>
    where
        D: DocumentSource + ?Sized,
        S: OverlaySurface + ?Sized,
    {
        surface.clear_all();

        let query = match Query::parse(raw) {
            Some(query) => query,
            None => {
                log::debug!("blank search query, overlays cleared");
                return Ok(SearchOutcome::Cleared);
            }
        };

        let page_count = match doc.page_count() {
            Ok(count) => count,
            Err(Error::DocumentUnavailable) => {
                log::debug!("search ignored: no document loaded");
                return Ok(SearchOutcome::NoDocument);
            }
            Err(e) => return Err(e),
        };

        let mut pages = Vec::new();
        for page in 1..=page_count as u32 {
            match self.search_page(doc, surface, &query, page) {
                Ok(0) => {}
                Ok(match_count) => pages.push(PageMatches { page, match_count }),
                Err(Error::DocumentUnavailable) => {
                    log::debug!("document went away during search");
                    return Ok(SearchOutcome::NoDocument);
                }
                Err(e) => {
                    log::warn!("skipping page {page} during search: {e}");
                }
            }
        }

        if pages.is_empty() {
            log::debug!("search for {:?} found no matches", query.text());
            Ok(SearchOutcome::NoMatches)
        } else {
            let summary = SearchSummary { pages };
            log::debug!(
                "search for {:?} found {} matches on {} pages",
                query.text(),
                summary.total_matches(),
                summary.matching_page_count()
            );
            Ok(SearchOutcome::Matches(summary))
        }
    }

    /// Scan one page and place its highlights. Returns the match count.
    fn search_page<D, S>(
        &self,
        doc: &D,
        surface: &mut S,
        query: &Query,
        page: u32,
    ) -> Result<usize>
    where
        D: DocumentSource + ?Sized,
        S: OverlaySurface + ?Sized,
    {
        let runs = doc.text_runs(page)?;

        let mut hits: Vec<(usize, Vec<RunMatch>)> = Vec::new();
        let mut count = 0;
        for (index, run) in runs.iter().enumerate() {
            let matches = query.scan_run(&run.text);
            if !matches.is_empty() {
                count += matches.len();
                hits.push((index, matches));
            }
        }
        if count == 0 {
            return Ok(0);
        }

        // Matches count toward the summary even when the page has nothing
        // to draw on.
        let Some((display_width, display_height)) = surface.display_size(page) else {
            log::debug!("page {page} has no display surface, skipping highlights");
            return Ok(count);
        };
        let native = match doc.page_size(page) {
            Ok(size) => size,
            Err(e) => {
                log::warn!("no page size for page {page}, skipping highlights: {e}");
                return Ok(count);
            }
        };
        let viewport = PageViewport::from_display(native, display_width, display_height);

        surface.clear_overlays(page);
        for (index, matches) in hits {
            let rects = highlight::run_highlights(
                &runs[index],
                &matches,
                self.measurer.as_ref(),
                &viewport,
                self.pad_ratio,
            );
            for rect in rects {
                surface.add_rectangle(page, rect);
            }
        }
        Ok(count)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{InMemoryDocument, TextRun};
    use crate::overlay::MemoryOverlays;
    use crate::viewport::PageSize;

    fn letter() -> PageSize {
        PageSize::new(612.0, 792.0)
    }

    #[test]
    fn test_blank_query_clears_without_scanning() {
        let doc = InMemoryDocument::new().with_page(
            letter(),
            vec![TextRun::horizontal("anything", 10.0, 700.0, 12.0, 48.0)],
        );
        let mut overlays = MemoryOverlays::new();
        overlays.set_display_size(1, 612.0, 792.0);
        overlays.add_rectangle(1, crate::geometry::Rect::new(0.0, 0.0, 5.0, 5.0));

        let engine = SearchEngine::new();
        let outcome = engine.run(&doc, &mut overlays, "   ").unwrap();

        assert_eq!(outcome, SearchOutcome::Cleared);
        assert_eq!(overlays.total_rectangles(), 0);
    }

    #[test]
    fn test_no_matches_reported_after_full_scan() {
        let doc = InMemoryDocument::new().with_page(
            letter(),
            vec![TextRun::horizontal("Hello World", 10.0, 700.0, 12.0, 66.0)],
        );
        let mut overlays = MemoryOverlays::new();
        overlays.set_display_size(1, 612.0, 792.0);

        let engine = SearchEngine::new();
        let outcome = engine.run(&doc, &mut overlays, "absent").unwrap();

        assert_eq!(outcome, SearchOutcome::NoMatches);
        assert_eq!(overlays.total_rectangles(), 0);
    }

    #[test]
    fn test_oversized_query_is_not_treated_as_blank() {
        let doc = InMemoryDocument::new().with_page(
            letter(),
            vec![TextRun::horizontal("short page", 10.0, 700.0, 12.0, 58.0)],
        );
        let mut overlays = MemoryOverlays::new();
        overlays.set_display_size(1, 612.0, 792.0);

        // Far past any search box, and past the regex compiled-size limit.
        let raw = "a".repeat(4_000_000);
        let engine = SearchEngine::new();
        let outcome = engine.run(&doc, &mut overlays, &raw).unwrap();

        assert_eq!(outcome, SearchOutcome::NoMatches);
    }

    #[test]
    fn test_matches_collect_per_page_counts() {
        let doc = InMemoryDocument::new()
            .with_page(
                letter(),
                vec![TextRun::horizontal("nothing here", 10.0, 700.0, 12.0, 70.0)],
            )
            .with_page(
                letter(),
                vec![
                    TextRun::horizontal("alpha beta alpha", 10.0, 700.0, 12.0, 96.0),
                    TextRun::horizontal("ALPHA", 10.0, 650.0, 12.0, 30.0),
                ],
            );
        let mut overlays = MemoryOverlays::new();
        overlays.set_display_size(1, 612.0, 792.0);
        overlays.set_display_size(2, 612.0, 792.0);

        let engine = SearchEngine::new();
        let outcome = engine.run(&doc, &mut overlays, "alpha").unwrap();

        match outcome {
            SearchOutcome::Matches(summary) => {
                assert_eq!(summary.page_numbers(), vec![2]);
                assert_eq!(summary.total_matches(), 3);
                assert_eq!(summary.first_page(), Some(2));
            }
            other => panic!("expected matches, got {other:?}"),
        }
        assert_eq!(overlays.rectangles(2).len(), 3);
        assert!(overlays.rectangles(1).is_empty());
    }

    #[test]
    fn test_missing_display_surface_keeps_counts() {
        let doc = InMemoryDocument::new().with_page(
            letter(),
            vec![TextRun::horizontal("target", 10.0, 700.0, 12.0, 36.0)],
        );
        // No display size registered for page 1.
        let mut overlays = MemoryOverlays::new();

        let engine = SearchEngine::new();
        let outcome = engine.run(&doc, &mut overlays, "target").unwrap();

        match outcome {
            SearchOutcome::Matches(summary) => {
                assert_eq!(summary.total_matches(), 1);
            }
            other => panic!("expected matches, got {other:?}"),
        }
        assert_eq!(overlays.total_rectangles(), 0);
    }

    #[test]
    fn test_summary_accessors() {
        let summary = SearchSummary {
            pages: vec![
                PageMatches { page: 2, match_count: 1 },
                PageMatches { page: 5, match_count: 4 },
            ],
        };
        assert_eq!(summary.page_numbers(), vec![2, 5]);
        assert_eq!(summary.total_matches(), 5);
        assert_eq!(summary.first_page(), Some(2));
        assert_eq!(summary.matching_page_count(), 2);
        assert!(!summary.is_empty());
        assert!(SearchSummary::default().is_empty());
    }

    #[test]
    fn test_summary_serializes() {
        let summary = SearchSummary {
            pages: vec![PageMatches { page: 1, match_count: 2 }],
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: SearchSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
