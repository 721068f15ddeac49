//! Glyph-metric estimation for substring widths.
//!
//! The text-extraction layer reports only a run's total rendered width, not
//! per-character advances. To place a highlight inside a run, the width of
//! the text before the match and of the match itself are therefore estimated
//! proportionally: measure the whole run in a fixed reference font, derive a
//! single linear correction factor `rendered_width / reference_width`, and
//! apply that factor to reference measurements of substrings.
//!
//! The estimate is deterministic within one search pass but is only an
//! approximation: proportions of the reference face stand in for the real
//! font's. An adapter with access to a richer text engine can supply its own
//! [`TextMeasurer`].

use crate::document::TextRun;

/// Default reference font size in pixels, matching a 100px measurement
/// context. Only the ratio between substring and whole-run measurements
/// matters, so the absolute size merely keeps intermediate values readable.
pub const REFERENCE_FONT_SIZE: f64 = 100.0;

/// Advance width applied to characters outside the built-in table,
/// in 1/1000 units of the font size.
const FALLBACK_ADVANCE: u16 = 556;

/// Helvetica AFM advance widths for ASCII 32..=126, in 1/1000 units.
#[rustfmt::skip]
const ASCII_ADVANCES: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // space ! " # $ % & ' ( )
    389, 584, 278, 333, 278, 278,                     // * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015,               // : ; < = > ? @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, // A-J
    667, 556, 833, 722, 778, 667, 778, 722, 667, 611, // K-T
    722, 667, 944, 667, 667, 611,                     // U-Z
    278, 278, 278, 469, 556, 333,                     // [ \ ] ^ _ `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, // a-j
    500, 222, 833, 556, 556, 556, 556, 333, 500, 278, // k-t
    556, 500, 722, 500, 500, 500,                     // u-z
    334, 260, 334, 584,                               // { | } ~
];

/// Reference measurement of text width in pixels.
///
/// Implementations must be consistent across calls within a single search
/// pass; pixel-identical output across engines or sessions is not required.
pub trait TextMeasurer {
    /// Measure the width of `text` in the reference font, in pixels.
    fn measure(&self, text: &str) -> f64;
}

/// Built-in measurer using Helvetica metrics at a fixed size.
///
/// Characters without a table entry get a fixed fallback advance; control
/// characters measure zero. Good enough for the proportional mapping this
/// crate needs, with no font engine in the dependency tree.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceFont {
    size: f64,
}

impl ReferenceFont {
    /// Create a measurer at the given font size in pixels.
    pub fn new(size: f64) -> Self {
        Self { size }
    }
}

impl Default for ReferenceFont {
    fn default() -> Self {
        Self::new(REFERENCE_FONT_SIZE)
    }
}

impl TextMeasurer for ReferenceFont {
    fn measure(&self, text: &str) -> f64 {
        let per_mille: f64 = text.chars().map(advance_per_mille).sum();
        per_mille * self.size / 1000.0
    }
}

fn advance_per_mille(c: char) -> f64 {
    if c.is_control() {
        return 0.0;
    }
    let code = c as usize;
    match code.checked_sub(32).and_then(|i| ASCII_ADVANCES.get(i)) {
        Some(&advance) => f64::from(advance),
        None => f64::from(FALLBACK_ADVANCE),
    }
}

/// Width estimation for substrings of one run, via the proportional
/// correction factor.
///
/// # Examples
///
/// ```
/// use pageturn::document::TextRun;
/// use pageturn::metrics::{ReferenceFont, RunMetrics};
///
/// let run = TextRun::horizontal("Hello World", 0.0, 0.0, 12.0, 100.0);
/// let measurer = ReferenceFont::default();
/// let metrics = RunMetrics::new(&run, &measurer);
///
/// assert_eq!(metrics.prefix_width(0), 0.0);
/// // The full run maps back onto its exact rendered width.
/// assert!((metrics.match_width(0, run.text.len()) - 100.0).abs() < 1e-9);
/// ```
pub struct RunMetrics<'a> {
    run: &'a TextRun,
    measurer: &'a dyn TextMeasurer,
    scale: f64,
}

impl<'a> RunMetrics<'a> {
    /// Bind a run to a measurer and compute its correction factor once.
    pub fn new(run: &'a TextRun, measurer: &'a dyn TextMeasurer) -> Self {
        let reference = measurer.measure(&run.text);
        // Zero reference width (non-rendering glyphs) collapses every derived
        // offset to the run origin: an accepted approximation, not an error.
        let scale = if reference.is_finite() && reference > 0.0 && run.rendered_width.is_finite() {
            run.rendered_width / reference
        } else {
            0.0
        };
        Self {
            run,
            measurer,
            scale,
        }
    }

    /// The linear correction factor `rendered_width / reference_width`,
    /// 0 when the reference measurement is 0. Never NaN.
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    /// Estimated rendered width of the text before byte offset `start`.
    pub fn prefix_width(&self, start: usize) -> f64 {
        self.measurer.measure(self.slice(0, start)) * self.scale
    }

    /// Estimated rendered width of the `len` bytes starting at `start`.
    pub fn match_width(&self, start: usize, len: usize) -> f64 {
        self.measurer.measure(self.slice(start, start + len)) * self.scale
    }

    /// Substring of the run's original-case text; out-of-range or
    /// non-boundary offsets degrade to the empty string (zero width)
    /// rather than panicking.
    fn slice(&self, start: usize, end: usize) -> &str {
        self.run.text.get(start..end).unwrap_or("")
    }
}
