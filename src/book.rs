//! Flip-book layout: widget options, spread positioning, and page edges.
//!
//! The viewer renders pages inside a page-flip widget. This module holds the
//! widget's initialization options and the layout math that depends only on
//! the current page: which edge of the spread a page sits on, and how far
//! the book shifts sideways so a lone cover or back page appears centered.

use serde::{Deserialize, Serialize};

/// How the flip widget sizes itself inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingMode {
    /// Pages keep the configured pixel size.
    Fixed,
    /// Pages stretch to fill the container.
    Stretch,
}

/// Initialization options for the page-flip widget, serialized with the
/// camelCase field names the widget expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipBookOptions {
    /// Page width in pixels.
    pub width: f64,
    /// Page height in pixels.
    pub height: f64,
    /// Sizing behavior.
    pub size: SizingMode,
    /// Single-page portrait layout instead of two-page spreads.
    pub use_portrait: bool,
    /// 0-based index of the page shown first.
    pub start_page: u32,
    /// Show the first page alone as a cover.
    pub show_cover: bool,
    /// Peak opacity of the fold shadow during a flip.
    pub max_shadow_opacity: f64,
    /// Render curl hints on hoverable page corners.
    pub show_page_corners: bool,
    /// Allow dragging pages with the mouse.
    pub use_mouse_events: bool,
    /// Minimum drag distance in pixels to register a swipe.
    pub swipe_distance: f64,
    /// Flip animation duration in milliseconds.
    pub flipping_time: u64,
}

impl FlipBookOptions {
    /// Options for a book of the given page size, with the widget defaults
    /// the viewer ships.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            size: SizingMode::Fixed,
            use_portrait: false,
            start_page: 0,
            show_cover: true,
            max_shadow_opacity: 0.3,
            show_page_corners: true,
            use_mouse_events: true,
            swipe_distance: 20.0,
            flipping_time: 800,
        }
    }
}

/// Which edge of an open spread a page sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEdge {
    /// The first page, shown alone.
    Cover,
    /// Left-hand page of a spread.
    Left,
    /// Right-hand page of a spread.
    Right,
}

/// Edge assignment for a 1-based page number in a cover-first book.
///
/// Page 1 is the cover. After the cover, spreads pair an even left page
/// with the following odd right page.
pub fn page_edge(page: u32) -> PageEdge {
    if page <= 1 {
        PageEdge::Cover
    } else if page % 2 == 0 {
        PageEdge::Left
    } else {
        PageEdge::Right
    }
}

/// Flip stiffness of a page, the widget's `data-density` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageDensity {
    /// Rigid page that flips as a single stiff sheet.
    Hard,
    /// Regular paper page that bends during the flip.
    Soft,
}

/// Density assignment for a 1-based page number.
///
/// The cover is a hard board; every page behind it is soft paper.
pub fn page_density(page: u32) -> PageDensity {
    if page <= 1 {
        PageDensity::Hard
    } else {
        PageDensity::Soft
    }
}

/// Horizontal placement of the book and visibility of the page-turn
/// triggers for the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookPosition {
    /// Horizontal shift as a percentage of the book width. Negative moves
    /// the book left.
    pub shift_percent: f64,
    /// Whether the previous-page trigger is shown.
    pub show_prev: bool,
    /// Whether the next-page trigger is shown.
    pub show_next: bool,
}

/// Book placement for the current page.
///
/// The cover and the final page each display alone on one half of the
/// spread, so the book shifts a quarter width toward them to stay visually
/// centered. Portrait layout centers the book and relies on swipes instead
/// of the side triggers.
pub fn book_position(page: u32, page_count: usize, portrait: bool) -> BookPosition {
    if portrait {
        return BookPosition {
            shift_percent: 0.0,
            show_prev: false,
            show_next: false,
        };
    }
    if page <= 1 {
        BookPosition {
            shift_percent: -25.0,
            show_prev: false,
            show_next: true,
        }
    } else if page as usize >= page_count {
        BookPosition {
            shift_percent: 25.0,
            show_prev: true,
            show_next: false,
        }
    } else {
        BookPosition {
            shift_percent: 0.0,
            show_prev: true,
            show_next: true,
        }
    }
}
