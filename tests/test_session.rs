//! Tests for the viewer session: search flow wiring, thumbnail listing,
//! navigation, and the book layout controls.

use pageturn::config::ViewerConfig;
use pageturn::document::{DocumentSource, InMemoryDocument, TextRun};
use pageturn::error::{Error, Result};
use pageturn::overlay::MemoryOverlays;
use pageturn::search::{SearchOutcome, SearchState};
use pageturn::session::ViewerSession;
use pageturn::thumbs::ThumbListing;
use pageturn::viewport::PageSize;
use std::cell::Cell;

fn letter() -> PageSize {
    PageSize::new(612.0, 792.0)
}

/// Helper to build a three-page document with "needle" on pages 2 and 3.
fn needle_doc() -> InMemoryDocument {
    InMemoryDocument::new()
        .with_page(letter(), vec![TextRun::horizontal("hay and more hay", 72.0, 700.0, 12.0, 90.0)])
        .with_page(letter(), vec![TextRun::horizontal("a needle appears", 72.0, 700.0, 12.0, 92.0)])
        .with_page(letter(), vec![TextRun::horizontal("Needle, again", 72.0, 700.0, 12.0, 76.0)])
}

/// Overlay surface with every page displayed at native size.
fn native_surface(pages: u32) -> MemoryOverlays {
    let mut overlays = MemoryOverlays::new();
    for page in 1..=pages {
        overlays.set_display_size(page, 612.0, 792.0);
    }
    overlays
}

/// Document source that fails text extraction on selected pages.
struct FlakyPages {
    inner: InMemoryDocument,
    failing: Vec<u32>,
}

impl DocumentSource for FlakyPages {
    fn page_count(&self) -> Result<usize> {
        self.inner.page_count()
    }

    fn page_size(&self, page: u32) -> Result<PageSize> {
        self.inner.page_size(page)
    }

    fn text_runs(&self, page: u32) -> Result<Vec<TextRun>> {
        if self.failing.contains(&page) {
            return Err(Error::Extraction {
                page,
                reason: "corrupt content stream".into(),
            });
        }
        self.inner.text_runs(page)
    }
}

/// Document source whose backend answers once at open, then dies.
struct DyingBackend {
    inner: InMemoryDocument,
    calls: Cell<usize>,
}

impl DyingBackend {
    fn new(inner: InMemoryDocument) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }
}

impl DocumentSource for DyingBackend {
    fn page_count(&self) -> Result<usize> {
        self.calls.set(self.calls.get() + 1);
        if self.calls.get() > 1 {
            return Err(Error::Load("backend connection lost".into()));
        }
        self.inner.page_count()
    }

    fn page_size(&self, _page: u32) -> Result<PageSize> {
        Err(Error::Load("backend connection lost".into()))
    }

    fn text_runs(&self, _page: u32) -> Result<Vec<TextRun>> {
        Err(Error::Load("backend connection lost".into()))
    }
}

mod search_flow {
    use super::*;

    #[test]
    fn test_results_update_state_listing_and_page() {
        let mut session = ViewerSession::open(needle_doc()).expect("open");
        let mut overlays = native_surface(3);

        let outcome = session.search(&mut overlays, "needle").expect("search");

        let summary = match outcome {
            SearchOutcome::Matches(summary) => summary,
            other => panic!("expected matches, got {other:?}"),
        };
        assert_eq!(summary.page_numbers(), vec![2, 3]);
        assert_eq!(session.search_state(), SearchState::ResultsShown);
        assert_eq!(session.current_page(), 2, "view jumps to the first match");
        assert_eq!(session.thumb_pages(), vec![2, 3], "strip narrows to matches");
        assert_eq!(session.last_search().map(|s| s.total_matches()), Some(2));
    }

    #[test]
    fn test_clear_restores_idle_and_full_listing() {
        let mut session = ViewerSession::open(needle_doc()).expect("open");
        let mut overlays = native_surface(3);

        session.search(&mut overlays, "needle").expect("search");
        assert!(overlays.total_rectangles() > 0);

        let outcome = session.clear_search(&mut overlays).expect("clear");

        assert_eq!(outcome, SearchOutcome::Cleared);
        assert_eq!(session.search_state(), SearchState::Idle);
        assert_eq!(session.listing(), &ThumbListing::AllPages);
        assert_eq!(session.thumb_pages(), vec![1, 2, 3]);
        assert!(session.last_search().is_none());
        assert_eq!(overlays.total_rectangles(), 0);
        assert_eq!(session.current_page(), 2, "clearing does not move the view");
    }

    #[test]
    fn test_no_results_empties_the_strip() {
        let mut session = ViewerSession::open(needle_doc()).expect("open");
        let mut overlays = native_surface(3);
        session.go_to_page(3);

        let outcome = session.search(&mut overlays, "absent").expect("search");

        assert_eq!(outcome, SearchOutcome::NoMatches);
        assert_eq!(session.search_state(), SearchState::NoResults);
        assert!(session.thumb_pages().is_empty(), "no matches, no thumbnails");
        assert!(session.last_search().is_none());
        assert_eq!(session.current_page(), 3, "view stays put without a match");
    }

    #[test]
    fn test_new_search_replaces_previous_results() {
        let mut session = ViewerSession::open(needle_doc()).expect("open");
        let mut overlays = native_surface(3);

        session.search(&mut overlays, "needle").expect("first search");
        session.search(&mut overlays, "hay").expect("second search");

        assert_eq!(session.thumb_pages(), vec![1], "only the latest results remain");
        assert_eq!(session.current_page(), 1);
        assert_eq!(overlays.pages_with_overlays(), vec![1]);
    }

    #[test]
    fn test_failed_pass_returns_to_idle() {
        let mut session = ViewerSession::open(DyingBackend::new(needle_doc())).expect("open");
        let mut overlays = native_surface(3);

        let err = session.search(&mut overlays, "needle").unwrap_err();

        assert!(matches!(err, Error::Load(_)));
        assert_eq!(
            session.search_state(),
            SearchState::Idle,
            "a failed pass must not stay reported as running"
        );
        assert_eq!(session.listing(), &ThumbListing::AllPages);
        assert!(session.last_search().is_none());
    }

    #[test]
    fn test_failing_page_drops_from_results() {
        let doc = FlakyPages {
            inner: needle_doc(),
            failing: vec![2],
        };
        let mut session = ViewerSession::open(doc).expect("open");
        let mut overlays = native_surface(3);

        let outcome = session.search(&mut overlays, "needle").expect("search");

        match outcome {
            SearchOutcome::Matches(summary) => {
                assert_eq!(summary.page_numbers(), vec![3]);
            }
            other => panic!("expected matches, got {other:?}"),
        }
        assert_eq!(session.current_page(), 3);
        assert_eq!(session.thumb_pages(), vec![3]);
    }
}

mod controls {
    use super::*;

    #[test]
    fn test_book_position_follows_navigation() {
        let mut session = ViewerSession::open(needle_doc()).expect("open");

        assert_eq!(session.book_position().shift_percent, -25.0, "cover sits right of center");
        session.next_page();
        assert_eq!(session.book_position().shift_percent, 0.0);
        session.go_to_last();
        let pos = session.book_position();
        assert_eq!(pos.shift_percent, 25.0, "back page sits left of center");
        assert!(!pos.show_next);
    }

    #[test]
    fn test_portrait_config_centers_book() {
        let config = ViewerConfig::new().with_portrait(true);
        let session = ViewerSession::open_with_config(needle_doc(), config).expect("open");

        let pos = session.book_position();
        assert_eq!(pos.shift_percent, 0.0);
        assert!(!pos.show_prev);
        assert!(!pos.show_next);

        let options = session.flip_book_options(420.0, 594.0);
        assert!(options.use_portrait);
    }

    #[test]
    fn test_autoplay_runs_to_the_back_page() {
        let mut session = ViewerSession::open(needle_doc()).expect("open");
        session.toggle_autoplay();

        while session.autoplay_tick().is_some() {}

        assert_eq!(session.current_page(), 3);
        assert!(session.is_autoplaying(), "running out of pages does not stop autoplay");
        assert_eq!(session.book_position().shift_percent, 25.0);
    }

    #[test]
    fn test_zoom_clamps_with_custom_range() {
        let config = ViewerConfig::new().with_zoom_range(1.0, 2.0);
        let mut session = ViewerSession::open_with_config(needle_doc(), config).expect("open");

        assert_eq!(session.zoom_by(5.0), 2.0);
        assert_eq!(session.zoom_by(-5.0), 1.0);
    }
}
