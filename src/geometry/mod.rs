//! Geometric primitives for highlight placement.
//!
//! This module provides the basic geometric types shared by the coordinate
//! projector and the overlay surfaces. All values are `f64`: page user-space
//! and screen pixels are both continuous coordinate systems here.

use serde::{Deserialize, Serialize};

/// A 2D point, either in page user-space or in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pageturn::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in screen pixels, origin at the top-left.
///
/// This is the shape handed to overlay surfaces: one rectangle per search
/// match, positioned absolutely within a page's coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the left edge
    pub left: f64,
    /// Y coordinate of the top edge
    pub top: f64,
    /// Width of rectangle
    pub width: f64,
    /// Height of rectangle
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pageturn::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a normalized rectangle from two opposite corners.
    ///
    /// The corners may arrive in any order: coordinate-system flips and
    /// rounding can invert operands, so the position is taken componentwise
    /// as the minimum and the extent as the absolute difference.
    ///
    /// # Examples
    ///
    /// ```
    /// use pageturn::geometry::{Point, Rect};
    ///
    /// let rect = Rect::from_corners(Point::new(110.0, 70.0), Point::new(10.0, 20.0));
    /// assert_eq!(rect.left, 10.0);
    /// assert_eq!(rect.top, 20.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Expand the rectangle vertically by `ratio` of its own height on both
    /// the top and the bottom edge.
    ///
    /// Highlight rectangles are anchored at the text baseline and undershoot
    /// ascenders and descenders; the overlay pass pads them before display.
    ///
    /// # Examples
    ///
    /// ```
    /// use pageturn::geometry::Rect;
    ///
    /// let padded = Rect::new(5.0, 20.0, 40.0, 10.0).padded_vertical(0.15);
    /// assert_eq!(padded.left, 5.0);
    /// assert_eq!(padded.top, 18.5);
    /// assert_eq!(padded.height, 13.0);
    /// ```
    pub fn padded_vertical(&self, ratio: f64) -> Rect {
        let pad = self.height * ratio;
        Rect {
            left: self.left,
            top: self.top - pad,
            width: self.width,
            height: self.height + pad * 2.0,
        }
    }
}
