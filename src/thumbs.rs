//! Thumbnail strip: sizing and page listing.
//!
//! Thumbnails render each page at a fixed pixel width. After a search the
//! strip narrows to the matching pages only; clearing the search restores
//! the full listing.

use crate::viewport::{PageSize, PageViewport};
use serde::{Deserialize, Serialize};

/// Viewport for rendering a page thumbnail at a target pixel width.
///
/// The scale is uniform, so the thumbnail keeps the page's aspect ratio.
/// A degenerate native width yields a zero-scale viewport rather than a
/// division error.
pub fn thumb_viewport(native: PageSize, target_width: f64) -> PageViewport {
    PageViewport::fit_width(native, target_width)
}

/// Which pages the thumbnail strip currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThumbListing {
    /// Every page of the document.
    AllPages,
    /// Only the listed pages, ascending. An empty list shows nothing,
    /// which is what a search without matches leaves behind.
    Matches(Vec<u32>),
}

impl Default for ThumbListing {
    fn default() -> Self {
        Self::AllPages
    }
}

impl ThumbListing {
    /// True when the strip is narrowed to search results.
    pub fn is_filtered(&self) -> bool {
        matches!(self, Self::Matches(_))
    }

    /// The 1-based page numbers the strip shows, given the document's
    /// page count.
    pub fn pages(&self, page_count: usize) -> Vec<u32> {
        match self {
            Self::AllPages => (1..=page_count as u32).collect(),
            Self::Matches(pages) => pages.clone(),
        }
    }
}
