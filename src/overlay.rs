//! Overlay surfaces: where highlight rectangles land.
//!
//! The overlay surface is the per-page visual layer drawn over the rendered
//! page image. The geometry core never touches a rendering backend; it talks
//! to this capability trait, so search and highlight placement run headless.
//! A browser shell implements it over DOM nodes; [`MemoryOverlays`] is the
//! in-memory implementation used by tests, fixtures, and the preview tool.

use crate::geometry::Rect;
use std::collections::HashMap;

/// Capability interface of the page-display collaborator.
///
/// Rectangles are non-interactive and carry no z-order: later insertions
/// simply render on top. Every search pass starts by clearing all overlays,
/// so rectangles never outlive the pass (or document load) that created them.
pub trait OverlaySurface {
    /// Remove every rectangle on every page.
    fn clear_all(&mut self);

    /// Remove every rectangle on one page.
    fn clear_overlays(&mut self, page: u32);

    /// Add one highlight rectangle to a page, in screen pixels relative to
    /// the page's displayed image.
    fn add_rectangle(&mut self, page: u32, rect: Rect);

    /// Current on-screen size in pixels of the page's rendered image, or
    /// `None` if the page has no live display surface. Queried fresh on
    /// every pass: the displayed size changes with window resize and zoom.
    fn display_size(&self, page: u32) -> Option<(f64, f64)>;
}

/// In-memory overlay store keyed by 1-based page number.
#[derive(Debug, Clone, Default)]
pub struct MemoryOverlays {
    rects: HashMap<u32, Vec<Rect>>,
    displays: HashMap<u32, (f64, f64)>,
}

impl MemoryOverlays {
    /// Create an empty store with no display surfaces registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the displayed size of a page's image. Pages without a
    /// registered size behave like pages whose display surface is missing:
    /// matches count, highlights are skipped.
    pub fn set_display_size(&mut self, page: u32, width: f64, height: f64) {
        self.displays.insert(page, (width, height));
    }

    /// Rectangles currently on a page.
    pub fn rectangles(&self, page: u32) -> &[Rect] {
        self.rects.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total rectangle count across all pages.
    pub fn total_rectangles(&self) -> usize {
        self.rects.values().map(Vec::len).sum()
    }

    /// Sorted page numbers that currently hold at least one rectangle.
    pub fn pages_with_overlays(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self
            .rects
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(&p, _)| p)
            .collect();
        pages.sort_unstable();
        pages
    }
}

impl OverlaySurface for MemoryOverlays {
    fn clear_all(&mut self) {
        self.rects.clear();
    }

    fn clear_overlays(&mut self, page: u32) {
        self.rects.remove(&page);
    }

    fn add_rectangle(&mut self, page: u32, rect: Rect) {
        self.rects.entry(page).or_default().push(rect);
    }

    fn display_size(&self, page: u32) -> Option<(f64, f64)> {
        self.displays.get(&page).copied()
    }
}
