//! Rectangles in CSS pixel space.

/// Layout measurements of an element at query time.
///
/// Coordinates are relative to the viewport's top-left corner, in CSS pixels,
/// like the `DOMRect` returned by `getBoundingClientRect()`. Unlike a grid
/// rectangle, any value may be negative or fractional: an element scrolled
/// above the viewport has a negative `top`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl BoundingRect {
    /// Creates a new `BoundingRect` from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        BoundingRect {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns the X value of the left edge.
    pub fn left(self) -> f64 {
        self.left
    }

    /// Returns the Y value of the top edge.
    ///
    /// This is the signed distance from the top of the viewport.
    pub fn top(self) -> f64 {
        self.top
    }

    /// Returns the X value of the right edge.
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    /// Returns the Y value of the bottom edge.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Returns the width of the rectangle.
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height of the rectangle.
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns a copy of this rectangle moved vertically by `dy`.
    ///
    /// Scrolling the page down by `n` pixels moves every element by `-n`.
    #[must_use]
    pub fn scrolled_by(self, dy: f64) -> Self {
        BoundingRect {
            top: self.top - dy,
            ..self
        }
    }
}
