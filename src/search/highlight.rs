//! Projection of text matches into screen-space highlight rectangles.
//!
//! A match lives in byte offsets inside a run's text. Turning it into a
//! rectangle takes three steps: estimate the horizontal extent in page user
//! space with [`RunMetrics`], extend vertically by the run's glyph height,
//! then project both corners through the page viewport and normalize. The
//! final rectangle is padded vertically so the highlight reads as a band
//! behind the text rather than a tight box.

use crate::document::TextRun;
use crate::geometry::Rect;
use crate::metrics::{RunMetrics, TextMeasurer};
use crate::search::scanner::RunMatch;
use crate::viewport::PageViewport;

/// Fraction of the projected glyph height added above and below each
/// highlight rectangle.
pub const DEFAULT_PAD_RATIO: f64 = 0.15;

/// Project one match within a run into a padded screen rectangle.
///
/// The match starts at the run origin plus the estimated width of the text
/// preceding it, and spans the estimated match width horizontally and the
/// run's glyph height vertically. Both corners go through the viewport
/// (which flips the y axis), so the result is normalized before padding.
pub fn project_match(
    run: &TextRun,
    m: RunMatch,
    metrics: &RunMetrics,
    viewport: &PageViewport,
    pad_ratio: f64,
) -> Rect {
    let x0 = run.origin_x + metrics.prefix_width(m.start);
    let y0 = run.origin_y;
    let x1 = x0 + metrics.match_width(m.start, m.len);
    let y1 = y0 + run.glyph_height();
    viewport
        .project_rect(x0, y0, x1, y1)
        .padded_vertical(pad_ratio)
}

/// Build highlight rectangles for every match found in a single run.
///
/// Metrics are computed once per run. With a zero or unusable rendered
/// width the metrics scale collapses to zero and the rectangles degenerate
/// to zero-width bands at the run origin, which is the intended fallback.
pub fn run_highlights(
    run: &TextRun,
    matches: &[RunMatch],
    measurer: &dyn TextMeasurer,
    viewport: &PageViewport,
    pad_ratio: f64,
) -> Vec<Rect> {
    let metrics = RunMetrics::new(run, measurer);
    matches
        .iter()
        .map(|&m| project_match(run, m, &metrics, viewport, pad_ratio))
        .collect()
}
