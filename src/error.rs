//! Error types for the viewer engine.
//!
//! This module defines every failure that can surface from document access,
//! search, and session operations. A blank search query is deliberately not an
//! error: it resolves to [`SearchOutcome::Cleared`](crate::search::SearchOutcome)
//! and restores the default thumbnail listing.

/// Result type alias for viewer engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while driving a loaded document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No document is loaded (or the backing document handle is gone).
    /// A search receiving this condition no-ops silently.
    #[error("no document is loaded")]
    DocumentUnavailable,

    /// Text-run extraction failed for a single page. The search pass logs
    /// and skips the page; the rest of the document is still scanned.
    #[error("failed to extract text runs from page {page}: {reason}")]
    Extraction {
        /// 1-based page number that failed
        page: u32,
        /// Reason reported by the extraction adapter
        reason: String,
    },

    /// A page number outside `1..=page_count` was requested.
    #[error("page {page} out of bounds (document has {page_count} pages)")]
    PageOutOfBounds {
        /// 1-based page number that was requested
        page: u32,
        /// Number of pages in the loaded document
        page_count: usize,
    },

    /// The document could not be loaded or decoded into a usable form.
    #[error("failed to load document: {0}")]
    Load(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
