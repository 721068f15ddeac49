//! Configuration for viewer behavior.

use std::time::Duration;

/// Viewer behavior configuration.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Smallest zoom factor the viewer allows.
    pub zoom_min: f64,

    /// Largest zoom factor the viewer allows.
    pub zoom_max: f64,

    /// Delay between automatic page turns.
    pub autoplay_interval: Duration,

    /// Vertical padding ratio applied to highlight rectangles.
    pub highlight_pad_ratio: f64,

    /// Point size of the reference font used for width estimation.
    pub reference_font_size: f64,

    /// Target width in pixels for page thumbnails.
    pub thumb_width: f64,

    /// Lay the book out as single portrait pages instead of spreads.
    pub portrait: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            zoom_min: 0.5,
            zoom_max: 3.0,
            autoplay_interval: Duration::from_millis(3000),
            highlight_pad_ratio: crate::search::DEFAULT_PAD_RATIO,
            reference_font_size: crate::metrics::REFERENCE_FONT_SIZE,
            thumb_width: 220.0,
            portrait: false,
        }
    }

    /// Set the allowed zoom range.
    pub fn with_zoom_range(mut self, min: f64, max: f64) -> Self {
        self.zoom_min = min;
        self.zoom_max = max;
        self
    }

    /// Set the autoplay page-turn interval.
    pub fn with_autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval = interval;
        self
    }

    /// Set the vertical padding ratio for highlights.
    pub fn with_highlight_pad_ratio(mut self, ratio: f64) -> Self {
        self.highlight_pad_ratio = ratio;
        self
    }

    /// Set the reference font size for width estimation.
    pub fn with_reference_font_size(mut self, size: f64) -> Self {
        self.reference_font_size = size;
        self
    }

    /// Set the thumbnail target width in pixels.
    pub fn with_thumb_width(mut self, width: f64) -> Self {
        self.thumb_width = width;
        self
    }

    /// Switch between portrait and spread layout.
    pub fn with_portrait(mut self, portrait: bool) -> Self {
        self.portrait = portrait;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::new();
        assert_eq!(config.zoom_min, 0.5);
        assert_eq!(config.zoom_max, 3.0);
        assert_eq!(config.autoplay_interval, Duration::from_millis(3000));
        assert_eq!(config.highlight_pad_ratio, 0.15);
        assert_eq!(config.reference_font_size, 100.0);
        assert_eq!(config.thumb_width, 220.0);
        assert!(!config.portrait);
    }

    #[test]
    fn test_builder_chain() {
        let config = ViewerConfig::new()
            .with_zoom_range(1.0, 2.0)
            .with_autoplay_interval(Duration::from_secs(5))
            .with_highlight_pad_ratio(0.2)
            .with_thumb_width(160.0)
            .with_portrait(true);
        assert_eq!(config.zoom_min, 1.0);
        assert_eq!(config.zoom_max, 2.0);
        assert_eq!(config.autoplay_interval, Duration::from_secs(5));
        assert_eq!(config.highlight_pad_ratio, 0.2);
        assert_eq!(config.thumb_width, 160.0);
        assert!(config.portrait);
    }
}
