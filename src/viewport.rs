//! Page viewport: user-space to device-pixel projection.
//!
//! A PDF page reports its geometry in user-space units with the origin at the
//! bottom-left; the screen draws in pixels with the origin at the top-left.
//! [`PageViewport`] bridges the two with independent horizontal and vertical
//! scale factors derived from the size the page image currently occupies on
//! screen.
//!
//! The displayed size changes with window resizes and zoom, so a viewport is
//! cheap to construct and meant to be rebuilt from the live display size on
//! every search pass, never cached across passes.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Native size of a page in user-space units at scale 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Width in user-space units
    pub width: f64,
    /// Height in user-space units
    pub height: f64,
}

impl PageSize {
    /// Create a new page size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width-to-height ratio, or 0 for a degenerate page.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            0.0
        }
    }
}

/// Projection from page user-space onto the displayed page image.
///
/// # Examples
///
/// ```
/// use pageturn::viewport::{PageSize, PageViewport};
///
/// // A 612x792 pt page displayed at 306 px wide.
/// let vp = PageViewport::fit_width(PageSize::new(612.0, 792.0), 306.0);
/// let p = vp.project_point(0.0, 792.0); // top-left corner of the page
/// assert_eq!(p.x, 0.0);
/// assert_eq!(p.y, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageViewport {
    native: PageSize,
    scale_x: f64,
    scale_y: f64,
}

impl PageViewport {
    /// Build a viewport from the page's native size and the on-screen size of
    /// its rendered image. The two axes scale independently; a shell that
    /// preserves aspect ratio gets equal factors.
    pub fn from_display(native: PageSize, display_width: f64, display_height: f64) -> Self {
        Self {
            native,
            scale_x: safe_ratio(display_width, native.width),
            scale_y: safe_ratio(display_height, native.height),
        }
    }

    /// Build a uniform viewport from the displayed width alone, assuming the
    /// shell preserved the page's aspect ratio.
    pub fn fit_width(native: PageSize, display_width: f64) -> Self {
        let scale = safe_ratio(display_width, native.width);
        Self {
            native,
            scale_x: scale,
            scale_y: scale,
        }
    }

    /// Build a viewport at an explicit uniform scale (thumbnail rendering).
    pub fn with_scale(native: PageSize, scale: f64) -> Self {
        Self {
            native,
            scale_x: scale,
            scale_y: scale,
        }
    }

    /// Device width of the projected page.
    pub fn width(&self) -> f64 {
        self.native.width * self.scale_x
    }

    /// Device height of the projected page.
    pub fn height(&self) -> f64 {
        self.native.height * self.scale_y
    }

    /// Horizontal scale factor.
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Vertical scale factor.
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Project a user-space point to device pixels, flipping the vertical
    /// axis: user-space measures y up from the page bottom, the screen
    /// measures y down from the top.
    pub fn project_point(&self, x: f64, y: f64) -> Point {
        Point::new(x * self.scale_x, (self.native.height - y) * self.scale_y)
    }

    /// Project a user-space rectangle given as two opposite corners and
    /// normalize the result. The vertical flip inverts corner order, which
    /// [`Rect::from_corners`] absorbs.
    pub fn project_rect(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::from_corners(self.project_point(x0, y0), self.project_point(x1, y1))
    }
}

/// Ratio that degrades to 0 instead of dividing by zero or going non-finite.
fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 && numerator.is_finite() {
        numerator / denominator
    } else {
        0.0
    }
}
