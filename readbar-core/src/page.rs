//! Define the page traits for actual layout interaction.
//!
//! Readbar doesn't measure or style anything by itself: it delegates this job
//! to a page backend, which talks to the actual document.
//!
//! This module defines the [`Page`] and [`Element`] traits, to be implemented
//! by actual types, usually wrapping a browser DOM.
use crate::style::StyleProperty;
use crate::BoundingRect;

/// Something on the page that can be measured and styled.
pub trait Element {
    /// Returns the current layout rectangle of this element.
    ///
    /// This must be read from the live layout on every call.
    fn bounding_rect(&self) -> BoundingRect;

    /// Sets an inline style property.
    fn set_style(&self, property: StyleProperty, value: &str);
}

/// Trait defining the required methods to be a page backend.
///
/// A page is the interface between the indicator and the actual document,
/// like a browser DOM.
pub trait Page {
    /// Handle to an element of this page.
    type Element: Element;

    /// Returns the current height of the scrollable area.
    fn viewport_height(&self) -> f64;

    /// Finds the first element matching `selector`.
    ///
    /// Returns `None` if no element matches.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Returns a name to identify the backend.
    ///
    /// Mostly used for debugging.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Event that requires the indicator to update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageEvent {
    /// The page scrolled.
    Scroll,
    /// The viewport was resized.
    Resize,
}

impl PageEvent {
    /// Returns the DOM event type this maps to.
    pub fn dom_type(self) -> &'static str {
        match self {
            PageEvent::Scroll => "scroll",
            PageEvent::Resize => "resize",
        }
    }
}

impl<T: Page + ?Sized> Page for &T {
    type Element = T::Element;

    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn query(&self, selector: &str) -> Option<Self::Element> {
        (**self).query(selector)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A page that can notify about events.
pub trait EventSource {
    /// Handle keeping a subscription alive.
    ///
    /// Dropping it unsubscribes.
    type Listener;

    /// Calls `callback` every time `event` happens, until the returned
    /// listener is dropped.
    fn listen(&self, event: PageEvent, callback: Box<dyn Fn()>) -> Self::Listener;
}
