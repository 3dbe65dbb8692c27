//! Geometric primitives in page space.
//!
//! Page space has its origin at the top-left corner of the page with y growing
//! downwards, measured in PDF points. Backends whose native space differs
//! convert into this one before handing rectangles to the search engine.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by two corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a rectangle from its top-left and bottom-right corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_multisearch::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Check if this rectangle fully contains another (edges inclusive).
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_multisearch::geometry::Rect;
    ///
    /// let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// let inner = Rect::new(10.0, 10.0, 20.0, 20.0);
    ///
    /// assert!(outer.contains(&inner));
    /// assert!(!inner.contains(&outer));
    /// ```
    pub fn contains(&self, other: &Rect) -> bool {
        self.x0 <= other.x0 && self.y0 <= other.y0 && self.x1 >= other.x1 && self.y1 >= other.y1
    }

    /// Scale both axes independently, e.g. from page points to canvas pixels.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_multisearch::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 20.0, 30.0, 40.0).scale(2.0, 0.5);
    /// assert_eq!(rect, Rect::new(20.0, 10.0, 60.0, 20.0));
    /// ```
    pub fn scale(&self, sx: f32, sy: f32) -> Rect {
        Rect::new(self.x0 * sx, self.y0 * sy, self.x1 * sx, self.y1 * sy)
    }
}
