//! # Pageturn
//!
//! Headless engine for a flip-book document viewer: page navigation, zoom,
//! autoplay, thumbnails, and text search with highlight placement.
//!
//! ## Core Features
//!
//! - **Search with highlights**: case-insensitive literal search across all
//!   pages, with match positions estimated from reference-font glyph widths
//!   and projected into screen-space rectangles
//! - **Viewer session**: current page, zoom clamping, autoplay ticks, sound
//!   and fullscreen toggles, thumbnail listing
//! - **Flip-book layout**: spread positioning, cover handling, page-flip
//!   widget options
//! - **Backend-neutral**: documents and overlay surfaces are traits; the
//!   engine never touches a renderer, so everything runs headless
//!
//! ## Architecture
//!
//! The engine is synchronous and single-threaded. The embedding shell owns
//! the event loop and calls in on user input and timers; every mutation goes
//! through `&mut`, so passes never interleave and the last call wins.
//!
//! ## Quick Start
//!
//! ```
//! use pageturn::document::{InMemoryDocument, TextRun};
//! use pageturn::overlay::MemoryOverlays;
//! use pageturn::session::ViewerSession;
//! use pageturn::viewport::PageSize;
//!
//! # fn main() -> Result<(), pageturn::Error> {
//! let doc = InMemoryDocument::new().with_page(
//!     PageSize::new(612.0, 792.0),
//!     vec![TextRun::horizontal("The quick brown fox", 72.0, 700.0, 12.0, 110.0)],
//! );
//!
//! let mut session = ViewerSession::open(doc)?;
//! let mut overlays = MemoryOverlays::new();
//! overlays.set_display_size(1, 612.0, 792.0);
//!
//! session.search(&mut overlays, "quick")?;
//! assert_eq!(session.current_page(), 1);
//! assert_eq!(overlays.rectangles(1).len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of Apache License, Version 2.0 or MIT license at
//! your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Page geometry and projection
pub mod geometry;
pub mod viewport;

// Document access
pub mod document;

// Glyph width estimation
pub mod metrics;

// Highlight overlays
pub mod overlay;

// Text search
pub mod search;

// Viewer state
pub mod book;
pub mod session;
pub mod thumbs;

// Configuration
pub mod config;

// Re-exports
pub use book::{
    book_position, page_density, page_edge, BookPosition, FlipBookOptions, PageDensity, PageEdge,
    SizingMode,
};
pub use config::ViewerConfig;
pub use document::{DocumentSource, InMemoryDocument, InMemoryPage, TextRun};
pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use metrics::{ReferenceFont, RunMetrics, TextMeasurer};
pub use overlay::{MemoryOverlays, OverlaySurface};
pub use search::{
    PageMatches, Query, RunMatch, SearchEngine, SearchOutcome, SearchState, SearchSummary,
};
pub use session::{Autoplay, ViewerSession};
pub use thumbs::{thumb_viewport, ThumbListing};
pub use viewport::{PageSize, PageViewport};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pageturn");
    }
}
