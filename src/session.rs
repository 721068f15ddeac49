//! Viewer session: one open document and its interaction state.
//!
//! A [`ViewerSession`] owns a document source plus everything the shell
//! around it needs to render controls: the current page, zoom, autoplay,
//! sound and fullscreen toggles, the thumbnail listing, and the search
//! lifecycle. It has no event loop of its own; the embedding shell calls
//! the mutating methods in response to user input and timers, and reads
//! the state back afterwards. Methods take `&mut self`, so two passes can
//! never interleave and the last call always wins.

use crate::book::{book_position, BookPosition, FlipBookOptions};
use crate::config::ViewerConfig;
use crate::document::DocumentSource;
use crate::error::{Error, Result};
use crate::overlay::OverlaySurface;
use crate::search::{SearchEngine, SearchOutcome, SearchState, SearchSummary};
use crate::thumbs::{thumb_viewport, ThumbListing};
use crate::viewport::{PageSize, PageViewport};
use std::fmt;
use std::time::Duration;

/// Automatic page turning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autoplay {
    /// Not turning pages.
    Off,
    /// Turning a page after each interval.
    On {
        /// Delay between page turns.
        interval: Duration,
    },
}

/// One open document and its viewer state.
pub struct ViewerSession<D: DocumentSource> {
    doc: D,
    page_count: usize,
    current_page: u32,
    zoom: f64,
    autoplay: Autoplay,
    sound_on: bool,
    fullscreen: bool,
    listing: ThumbListing,
    search_state: SearchState,
    last_search: Option<SearchSummary>,
    engine: SearchEngine,
    config: ViewerConfig,
}

// Manual impl: `doc` and `engine` (trait-object measurer) are not `Debug`,
// so the viewer state is shown and those fields are elided.
impl<D: DocumentSource> fmt::Debug for ViewerSession<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewerSession")
            .field("page_count", &self.page_count)
            .field("current_page", &self.current_page)
            .field("zoom", &self.zoom)
            .field("autoplay", &self.autoplay)
            .field("sound_on", &self.sound_on)
            .field("fullscreen", &self.fullscreen)
            .field("listing", &self.listing)
            .field("search_state", &self.search_state)
            .field("last_search", &self.last_search)
            .finish_non_exhaustive()
    }
}

impl<D: DocumentSource> ViewerSession<D> {
    /// Open a session on a document with default configuration.
    ///
    /// Fails with [`Error::DocumentUnavailable`] if the document reports
    /// zero pages: a book with nothing to show cannot be opened.
    pub fn open(doc: D) -> Result<Self> {
        Self::open_with_config(doc, ViewerConfig::default())
    }

    /// Open a session with explicit configuration.
    pub fn open_with_config(doc: D, config: ViewerConfig) -> Result<Self> {
        let page_count = doc.page_count()?;
        if page_count == 0 {
            return Err(Error::DocumentUnavailable);
        }
        log::debug!("opened document with {page_count} pages");
        let engine = SearchEngine::with_config(&config);
        Ok(Self {
            doc,
            page_count,
            current_page: 1,
            zoom: 1.0,
            autoplay: Autoplay::Off,
            sound_on: true,
            fullscreen: false,
            listing: ThumbListing::AllPages,
            search_state: SearchState::Idle,
            last_search: None,
            engine,
            config,
        })
    }

    /// The document this session displays.
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// Close the session and take the document back.
    pub fn into_document(self) -> D {
        self.doc
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// 1-based page currently shown.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Jump to a page, clamped to the document. Returns the landing page.
    pub fn go_to_page(&mut self, page: u32) -> u32 {
        self.current_page = page.clamp(1, self.page_count as u32);
        self.current_page
    }

    /// Turn to the next page, stopping at the last one.
    pub fn next_page(&mut self) -> u32 {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    /// Turn to the previous page, stopping at the cover.
    pub fn prev_page(&mut self) -> u32 {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Jump to the last page.
    pub fn go_to_last(&mut self) -> u32 {
        self.go_to_page(self.page_count as u32)
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Adjust zoom by a delta, clamped to the configured range. Returns
    /// the resulting factor.
    pub fn zoom_by(&mut self, delta: f64) -> f64 {
        self.zoom = (self.zoom + delta).clamp(self.config.zoom_min, self.config.zoom_max);
        self.zoom
    }

    /// Whether autoplay is turning pages.
    pub fn is_autoplaying(&self) -> bool {
        matches!(self.autoplay, Autoplay::On { .. })
    }

    /// Current autoplay state.
    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    /// Start or stop autoplay. Returns true when autoplay is now on.
    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplay = match self.autoplay {
            Autoplay::Off => Autoplay::On {
                interval: self.config.autoplay_interval,
            },
            Autoplay::On { .. } => Autoplay::Off,
        };
        self.is_autoplaying()
    }

    /// One autoplay timer tick: turn to the next page if autoplay is on.
    ///
    /// Returns the new page, or `None` when nothing moved. Reaching the
    /// last page does not stop autoplay; further ticks simply stay put,
    /// like a flip widget whose `flipNext` has run out of pages.
    pub fn autoplay_tick(&mut self) -> Option<u32> {
        if !self.is_autoplaying() {
            return None;
        }
        if (self.current_page as usize) < self.page_count {
            Some(self.next_page())
        } else {
            None
        }
    }

    /// Whether the page-flip sound is enabled.
    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    /// Toggle the page-flip sound. Returns the new state.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_on = !self.sound_on;
        self.sound_on
    }

    /// Whether the viewer is in fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Toggle fullscreen. Returns the new state.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Book placement and trigger visibility for the current page.
    pub fn book_position(&self) -> BookPosition {
        book_position(self.current_page, self.page_count, self.config.portrait)
    }

    /// Flip widget options for a book rendered at the given page size,
    /// opening on the session's current page.
    pub fn flip_book_options(&self, width: f64, height: f64) -> FlipBookOptions {
        let mut options = FlipBookOptions::new(width, height);
        options.use_portrait = self.config.portrait;
        options.start_page = self.current_page - 1;
        options
    }

    /// What the thumbnail strip currently shows.
    pub fn listing(&self) -> &ThumbListing {
        &self.listing
    }

    /// The 1-based pages the thumbnail strip shows.
    pub fn thumb_pages(&self) -> Vec<u32> {
        self.listing.pages(self.page_count)
    }

    /// Render viewport for one thumbnail, scaled to the configured strip
    /// width.
    pub fn thumb_viewport(&self, native: PageSize) -> PageViewport {
        thumb_viewport(native, self.config.thumb_width)
    }

    /// Current search lifecycle state.
    pub fn search_state(&self) -> SearchState {
        self.search_state
    }

    /// Summary of the last completed search with matches, if any.
    pub fn last_search(&self) -> Option<&SearchSummary> {
        self.last_search.as_ref()
    }

    /// Run a search pass and update the session to its outcome.
    ///
    /// Highlights land on the overlay surface; the thumbnail strip narrows
    /// to the matching pages and the view jumps to the first of them. A
    /// blank query clears highlights, restores the full thumbnail listing,
    /// and returns the session to idle. A pass that fails outright returns
    /// the error with the session back at idle, so the state never reports
    /// a search that is no longer running.
    pub fn search<S>(&mut self, surface: &mut S, raw: &str) -> Result<SearchOutcome>
    where
        S: OverlaySurface + ?Sized,
    {
        self.search_state = SearchState::Searching;
        let outcome = match self.engine.run(&self.doc, surface, raw) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.search_state = SearchState::Idle;
                return Err(err);
            }
        };
        match &outcome {
            SearchOutcome::Cleared => {
                self.listing = ThumbListing::AllPages;
                self.last_search = None;
                self.search_state = SearchState::Idle;
            }
            SearchOutcome::NoDocument => {
                self.search_state = SearchState::Idle;
            }
            SearchOutcome::NoMatches => {
                self.listing = ThumbListing::Matches(Vec::new());
                self.last_search = None;
                self.search_state = SearchState::NoResults;
            }
            SearchOutcome::Matches(summary) => {
                self.listing = ThumbListing::Matches(summary.page_numbers());
                if let Some(first) = summary.first_page() {
                    self.go_to_page(first);
                }
                self.last_search = Some(summary.clone());
                self.search_state = SearchState::ResultsShown;
            }
        }
        Ok(outcome)
    }

    /// Clear any active search: overlays, listing, and state.
    pub fn clear_search<S>(&mut self, surface: &mut S) -> Result<SearchOutcome>
    where
        S: OverlaySurface + ?Sized,
    {
        self.search(surface, "")
    }
}
