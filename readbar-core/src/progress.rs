//! Scroll fraction computation.
//!
//! As the page scrolls down, the top of the main content element moves from a
//! positive offset (below the top of the viewport) towards
//! `-(content_height - viewport_height)`, where its bottom edge meets the
//! bottom of the viewport. The progress is the ratio between the distance
//! travelled and this total travel, as a percentage.
use crate::style::Length;
use crate::BoundingRect;
use std::fmt;

/// Scroll progress through the main content, as a percentage.
///
/// Never negative. It is not capped at 100 unless explicitly requested with
/// [`Progress::clamped_to_full`]; malformed layouts can overshoot.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Progress(f64);

impl Progress {
    /// No progress: the content has not been scrolled into yet.
    pub const ZERO: Progress = Progress(0.0);

    /// Content scrolled through entirely.
    pub const FULL: Progress = Progress(100.0);

    /// Creates a progress value, forcing negative or undefined values to 0.
    pub fn new(percent: f64) -> Self {
        // `!(x > 0)` also catches NaN and -0.
        if !(percent > 0.0) {
            Progress::ZERO
        } else {
            Progress(percent)
        }
    }

    /// Returns the percentage.
    pub fn percent(self) -> f64 {
        self.0
    }

    /// Returns `true` if nothing has been scrolled past yet.
    ///
    /// The top button is hidden exactly when this is `true`.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Returns this progress, capped at 100.
    #[must_use]
    pub fn clamped_to_full(self) -> Self {
        Progress(self.0.min(100.0))
    }

    /// Returns the width to give to the progress bar.
    pub fn width(self) -> Length {
        Length::Percent(self.0)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.width(), f)
    }
}

/// Computes the scroll progress through an element.
///
/// * `scroll_distance` is the signed distance from the top of the viewport to
///   the top of the element.
/// * `viewport_height` is the height of the scrollable area.
/// * `content_height` is the rendered height of the element.
///
/// When the element is exactly as tall as the viewport there is no travel to
/// normalize against; this returns 0.
///
/// # Examples
///
/// ```
/// # use readbar_core::progress::scroll_fraction;
/// assert_eq!(scroll_fraction(-1000.0, 800.0, 2800.0).percent(), 50.0);
/// assert!(scroll_fraction(800.0, 800.0, 2800.0).is_zero());
/// ```
pub fn scroll_fraction(scroll_distance: f64, viewport_height: f64, content_height: f64) -> Progress {
    let percent = (scroll_distance / (viewport_height - content_height)) * 100.0;

    if !percent.is_finite() {
        log::debug!(
            "No scroll travel (viewport {viewport_height}, content {content_height}); progress is 0"
        );
        return Progress::ZERO;
    }

    Progress::new(percent)
}

/// Computes the scroll progress through the given element's rectangle.
pub fn progress_of(main: BoundingRect, viewport_height: f64) -> Progress {
    scroll_fraction(main.top(), viewport_height, main.height())
}

/// Computes the offset aligning the top button's right edge with `right_of_main`.
pub fn top_button_left(right_of_main: f64, button_width: f64) -> Length {
    Length::Px(right_of_main - button_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn before_scrolling_is_clamped() {
        let p = scroll_fraction(800.0, 800.0, 2800.0);
        assert!(p.is_zero());
        assert_eq!(p.width().to_string(), "0%");
    }

    #[test]
    fn halfway() {
        let p = scroll_fraction(-1000.0, 800.0, 2800.0);
        assert_eq!(p.percent(), 50.0);
        assert_eq!(p.to_string(), "50%");
    }

    #[test]
    fn non_negative_distance_is_zero() {
        for top in [0.0, -0.0, 0.5, 1.0, 400.0, 1e9] {
            assert_eq!(scroll_fraction(top, 800.0, 2800.0), Progress::ZERO);
        }
    }

    #[test]
    fn end_of_content() {
        assert_eq!(scroll_fraction(-2000.0, 800.0, 2800.0).percent(), 100.0);
    }

    #[test]
    fn upper_bound_not_enforced() {
        let p = scroll_fraction(-3000.0, 800.0, 2800.0);
        assert_eq!(p.percent(), 150.0);
        assert_eq!(p.clamped_to_full(), Progress::FULL);
    }

    #[test]
    fn strictly_increasing_as_content_scrolls() {
        let mut last = scroll_fraction(-1.0, 800.0, 2800.0).percent();
        for step in 2..200 {
            let top = -(step as f64) * 10.0;
            let p = scroll_fraction(top, 800.0, 2800.0).percent();
            assert!(p > last, "{p} should exceed {last} at top={top}");
            last = p;
        }
    }

    #[test]
    fn linear_in_distance() {
        let a = scroll_fraction(-200.0, 800.0, 2800.0).percent();
        let b = scroll_fraction(-400.0, 800.0, 2800.0).percent();
        assert_eq!(b, 2.0 * a);
    }

    #[test]
    fn same_geometry_same_result() {
        let a = scroll_fraction(-1234.5, 768.0, 4321.0);
        let b = scroll_fraction(-1234.5, 768.0, 4321.0);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn no_travel() {
        assert!(scroll_fraction(-10.0, 800.0, 800.0).is_zero());
        assert!(scroll_fraction(0.0, 800.0, 800.0).is_zero());
        assert!(scroll_fraction(10.0, 800.0, 800.0).is_zero());
    }

    #[test]
    fn from_rect() {
        let main = BoundingRect::new(160.0, -1000.0, 800.0, 2800.0);
        assert_eq!(progress_of(main, 800.0).percent(), 50.0);
    }

    #[test]
    fn button_alignment() {
        assert_eq!(top_button_left(960.0, 40.0).to_string(), "920px");
    }
}
