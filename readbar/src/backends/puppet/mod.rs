//! Puppet backend
//!
//! An in-memory page, for tests. Elements are registered under a selector
//! with a rectangle in document coordinates; scrolling the puppet page moves
//! every element that is not fixed. Every style write is recorded on the
//! element, and sent to the receivers returned by [`Backend::stream`] that
//! are still alive.
use crossbeam_channel::{self, Receiver, Sender};

use self::observed::{ObservedStyle, ObservedWrite};
use crate::page::{Element, EventSource, Page, PageEvent};
use crate::style::StyleProperty;
use crate::BoundingRect;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

pub mod observed;

/// Default viewport height for the puppet page.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

type Callback = Rc<dyn Fn()>;

struct Inner {
    viewport_height: Cell<f64>,
    scroll_y: Cell<f64>,
    elements: RefCell<HashMap<String, PuppetElement>>,
    listeners: RefCell<Vec<(usize, PageEvent, Callback)>>,
    next_listener: Cell<usize>,
    streams: RefCell<Vec<Sender<ObservedWrite>>>,
}

/// Puppet backend for testing.
///
/// Cloning it gives another handle to the same page.
#[derive(Clone)]
pub struct Backend {
    inner: Rc<Inner>,
}

impl Backend {
    /// Creates a new empty puppet page of given or default viewport height.
    pub fn init(viewport_height: Option<f64>) -> Self {
        Backend {
            inner: Rc::new(Inner {
                viewport_height: Cell::new(viewport_height.unwrap_or(DEFAULT_VIEWPORT_HEIGHT)),
                scroll_y: Cell::new(0.0),
                elements: RefCell::new(HashMap::new()),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                streams: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Creates a puppet page laid out like a typical article.
    ///
    /// * 800px viewport.
    /// * `main` at `(160, 800)`, 800px wide and 2800px tall.
    /// * `section.main-content` inside it.
    /// * A fixed `#progress-bar` at the top, and a fixed 40px `#top-button`.
    pub fn article() -> Self {
        let page = Backend::init(Some(DEFAULT_VIEWPORT_HEIGHT));
        page.add_element("main", BoundingRect::new(160.0, 800.0, 800.0, 2800.0));
        page.add_element(
            "section.main-content",
            BoundingRect::new(160.0, 900.0, 800.0, 2600.0),
        );
        page.add_fixed_element("#progress-bar", BoundingRect::new(0.0, 0.0, 0.0, 4.0));
        page.add_fixed_element("#top-button", BoundingRect::new(0.0, 740.0, 40.0, 40.0));
        page
    }

    fn insert(&self, selector: String, rect: BoundingRect, fixed: bool) -> PuppetElement {
        let element = PuppetElement {
            selector: selector.clone(),
            state: Rc::new(RefCell::new(ElementState {
                rect,
                fixed,
                style: ObservedStyle::default(),
            })),
            page: Rc::downgrade(&self.inner),
        };
        self.inner
            .elements
            .borrow_mut()
            .insert(selector, element.clone());
        element
    }

    /// Adds an element that scrolls with the document.
    ///
    /// `rect` is in document coordinates. Replaces any element registered
    /// under the same selector.
    pub fn add_element<S: Into<String>>(&self, selector: S, rect: BoundingRect) -> PuppetElement {
        self.insert(selector.into(), rect, false)
    }

    /// Adds an element that stays in place when scrolling.
    ///
    /// `rect` is in viewport coordinates.
    pub fn add_fixed_element<S: Into<String>>(
        &self,
        selector: S,
        rect: BoundingRect,
    ) -> PuppetElement {
        self.insert(selector.into(), rect, true)
    }

    /// Removes the element registered under `selector`.
    pub fn remove_element(&self, selector: &str) -> Option<PuppetElement> {
        self.inner.elements.borrow_mut().remove(selector)
    }

    /// Returns the current vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.inner.scroll_y.get()
    }

    /// Scrolls the document to `y`, then fires a scroll event.
    pub fn scroll_to(&self, y: f64) {
        self.inner.scroll_y.set(y);
        self.dispatch(PageEvent::Scroll);
    }

    /// Changes the viewport height, then fires a resize event.
    pub fn resize(&self, viewport_height: f64) {
        self.inner.viewport_height.set(viewport_height);
        self.dispatch(PageEvent::Resize);
    }

    /// Calls every listener subscribed to `event`.
    pub fn dispatch(&self, event: PageEvent) {
        // Listeners may subscribe or unsubscribe while being called.
        let callbacks: Vec<Callback> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(_, _, cb)| Rc::clone(cb))
            .collect();

        for callback in callbacks {
            callback();
        }
    }

    /// Returns the number of active listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Output stream of style writes made on this page's elements.
    ///
    /// Only writes made after this call are sent. Dropping the receiver stops
    /// the page from queuing more.
    pub fn stream(&self) -> Receiver<ObservedWrite> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.inner.streams.borrow_mut().push(sender);
        receiver
    }
}

impl Page for Backend {
    type Element = PuppetElement;

    fn viewport_height(&self) -> f64 {
        self.inner.viewport_height.get()
    }

    fn query(&self, selector: &str) -> Option<PuppetElement> {
        self.inner.elements.borrow().get(selector).cloned()
    }

    fn name(&self) -> &str {
        "puppet"
    }
}

/// Subscription to a puppet page event.
///
/// Dropping it unsubscribes.
pub struct Listener {
    id: usize,
    page: Weak<Inner>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(page) = self.page.upgrade() {
            page.listeners.borrow_mut().retain(|(id, _, _)| *id != self.id);
        }
    }
}

impl EventSource for Backend {
    type Listener = Listener;

    fn listen(&self, event: PageEvent, callback: Box<dyn Fn()>) -> Listener {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, event, Rc::from(callback)));

        Listener {
            id,
            page: Rc::downgrade(&self.inner),
        }
    }
}

struct ElementState {
    rect: BoundingRect,
    fixed: bool,
    style: ObservedStyle,
}

/// Element of a puppet page.
///
/// Cloning it gives another handle to the same element.
#[derive(Clone)]
pub struct PuppetElement {
    selector: String,
    state: Rc<RefCell<ElementState>>,
    page: Weak<Inner>,
}

impl PuppetElement {
    /// Returns the selector this element was registered under.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Moves or resizes this element.
    ///
    /// Coordinates follow the same convention as when it was added.
    pub fn set_rect(&self, rect: BoundingRect) {
        self.state.borrow_mut().rect = rect;
    }

    /// Returns the inline style written so far.
    pub fn style(&self) -> ObservedStyle {
        self.state.borrow().style.clone()
    }
}

impl Element for PuppetElement {
    fn bounding_rect(&self) -> BoundingRect {
        let state = self.state.borrow();
        match self.page.upgrade() {
            Some(page) if !state.fixed => state.rect.scrolled_by(page.scroll_y.get()),
            _ => state.rect,
        }
    }

    fn set_style(&self, property: StyleProperty, value: &str) {
        self.state.borrow_mut().style.set(property, value);

        if let Some(page) = self.page.upgrade() {
            let write = ObservedWrite {
                selector: self.selector.clone(),
                property,
                value: value.to_string(),
            };
            // Forget the streams whose receiver was dropped.
            page.streams
                .borrow_mut()
                .retain(|sender| sender.send(write.clone()).is_ok());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use std::cell::Cell;

    #[test]
    fn scrolling_moves_documents_elements_only() {
        let page = Backend::article();
        page.scroll_to(1800.0);

        let main = page.query("main").unwrap();
        assert_eq!(main.bounding_rect().top(), -1000.0);
        assert_eq!(main.bounding_rect().right(), 960.0);

        let button = page.query("#top-button").unwrap();
        assert_eq!(button.bounding_rect().top(), 740.0);
    }

    #[test]
    fn writes_are_streamed() {
        let page = Backend::init(None);
        let stream = page.stream();
        let bar = page.add_fixed_element("#bar", BoundingRect::default());

        bar.set_style(StyleProperty::Width, "12%");
        assert_eq!(bar.style().get(StyleProperty::Width), Some("12%"));

        let write = stream.try_recv().unwrap();
        assert_eq!(write.to_string(), "#bar { width: 12% }");
        assert!(stream.try_recv().is_err());
    }

    #[test]
    fn writes_only_queued_for_live_streams() {
        let page = Backend::article();
        let _attached = crate::attach(page.clone(), &Config::default()).unwrap();

        for step in 0..10_000 {
            page.scroll_to(f64::from(step % 3000));
        }
        assert!(page.inner.streams.borrow().is_empty());

        let stream = page.stream();
        page.scroll_to(1800.0);
        assert_eq!(stream.len(), 2);

        drop(stream);
        page.scroll_to(1900.0);
        assert!(page.inner.streams.borrow().is_empty());
    }

    #[test]
    fn dropping_listener_unsubscribes() {
        let page = Backend::init(None);
        let count = Rc::new(Cell::new(0));

        let c = Rc::clone(&count);
        let listener = page.listen(PageEvent::Resize, Box::new(move || c.set(c.get() + 1)));
        page.resize(600.0);
        page.scroll_to(10.0);
        assert_eq!(count.get(), 1);
        assert_eq!(page.viewport_height(), 600.0);

        drop(listener);
        page.resize(700.0);
        assert_eq!(count.get(), 1);
        assert_eq!(page.listener_count(), 0);
    }

    #[test]
    fn removed_elements_are_not_found() {
        let page = Backend::article();
        assert!(page.remove_element("#top-button").is_some());
        assert!(page.query("#top-button").is_none());
        assert!(page.query("main").is_some());
    }
}
