use crossbeam_channel::{self, Receiver, Sender};
use std::rc::Rc;

use crate::page::{EventSource, Page, PageEvent};
use crate::{Config, Error, Indicator};

/// Convenient alias to the result of `Readbar::event_sink`.
pub type EventSink = Sender<PageEvent>;

/// Root of a readbar instance.
///
/// It owns the [`Indicator`] and a queue of pending events.
///
/// Events can be handled directly with [`Readbar::on_event`], or queued
/// through [`Readbar::event_sink`] and handled in batch with
/// [`Readbar::step`].
pub struct Readbar<P: Page> {
    indicator: Indicator<P>,
    event_source: Receiver<PageEvent>,
    event_sink: Sender<PageEvent>,
}

impl<P: Page> Readbar<P> {
    /// Attaches a new indicator to `page`.
    ///
    /// The top button (if any) is positioned right away; the progress bar is
    /// left alone until the first scroll.
    pub fn new(page: P, config: &Config) -> Result<Self, Error> {
        let indicator = Indicator::attach(page, config)?;
        indicator.position_top_button();

        let (event_sink, event_source) = crossbeam_channel::unbounded();

        Ok(Readbar {
            indicator,
            event_source,
            event_sink,
        })
    }

    /// Returns the indicator driven by this instance.
    pub fn indicator(&self) -> &Indicator<P> {
        &self.indicator
    }

    /// Returns the page this instance is attached to.
    pub fn page(&self) -> &P {
        self.indicator.page()
    }

    /// Returns a sender to queue events.
    ///
    /// Queued events are handled on the next call to [`Readbar::step`].
    pub fn event_sink(&self) -> &EventSink {
        &self.event_sink
    }

    /// Handles an event right away.
    pub fn on_event(&self, event: PageEvent) {
        log::trace!("{event:?} on {} page", self.page().name());
        self.indicator.on_event(event);
    }

    /// Handles every queued event.
    ///
    /// Returns the number of events handled.
    pub fn step(&self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_source.try_recv() {
            self.on_event(event);
            handled += 1;
        }
        handled
    }

    /// Returns the events this instance needs to hear about.
    pub fn events(&self) -> &'static [PageEvent] {
        if self.indicator.variant().has_top_button() {
            &[PageEvent::Scroll, PageEvent::Resize]
        } else {
            &[PageEvent::Scroll]
        }
    }
}

/// A readbar instance subscribed to its page's events.
///
/// Dropping it, or calling [`Attached::detach`], unsubscribes.
pub struct Attached<P: Page + EventSource> {
    readbar: Rc<Readbar<P>>,
    listeners: Vec<P::Listener>,
}

impl<P: Page + EventSource + 'static> Attached<P> {
    /// Returns the readbar instance.
    pub fn readbar(&self) -> &Readbar<P> {
        &self.readbar
    }

    /// Returns the page.
    pub fn page(&self) -> &P {
        self.readbar.page()
    }

    /// Unsubscribes from page events.
    ///
    /// Returns the readbar instance, which can still be driven manually.
    pub fn detach(mut self) -> Rc<Readbar<P>> {
        self.listeners.clear();
        log::debug!("Detached from {} page", self.readbar.page().name());
        Rc::clone(&self.readbar)
    }

    /// Keeps the subscriptions for the rest of the program.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Attaches a new indicator to `page`, and subscribes to the events it needs.
///
/// Scroll events are always handled; resize events only when the variant has
/// a top button.
pub fn attach<P>(page: P, config: &Config) -> Result<Attached<P>, Error>
where
    P: Page + EventSource + 'static,
{
    let readbar = Rc::new(Readbar::new(page, config)?);

    let listeners = readbar
        .events()
        .iter()
        .map(|&event| {
            // Weak, so a page holding its listeners does not keep us alive.
            let weak = Rc::downgrade(&readbar);
            readbar.page().listen(
                event,
                Box::new(move || {
                    if let Some(readbar) = weak.upgrade() {
                        readbar.on_event(event);
                    }
                }),
            )
        })
        .collect();

    log::debug!(
        "Listening to {:?} on {} page",
        readbar.events(),
        readbar.page().name()
    );

    Ok(Attached { readbar, listeners })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::puppet;
    use crate::style::{DisplayMode, StyleProperty};
    use crate::{BoundingRect, Role, Variant};

    fn width(page: &puppet::Backend) -> Option<String> {
        let bar = page.query("#progress-bar").unwrap();
        bar.style().get(StyleProperty::Width).map(String::from)
    }

    fn button(page: &puppet::Backend) -> puppet::observed::ObservedStyle {
        page.query("#top-button").unwrap().style()
    }

    #[test]
    fn button_positioned_on_attach() {
        let page = puppet::Backend::article();
        let _attached = attach(page.clone(), &Config::default()).unwrap();

        assert_eq!(button(&page).get(StyleProperty::Left), Some("920px"));
        // Nothing else until the first scroll.
        assert_eq!(width(&page), None);
        assert_eq!(button(&page).display(), None);
    }

    #[test]
    fn scroll_updates_bar_and_button() {
        let page = puppet::Backend::article();
        let _attached = attach(page.clone(), &Config::default()).unwrap();

        page.scroll_to(0.0);
        assert_eq!(width(&page).as_deref(), Some("0%"));
        assert_eq!(button(&page).display(), Some(DisplayMode::None));

        page.scroll_to(1800.0);
        assert_eq!(width(&page).as_deref(), Some("50%"));
        assert_eq!(button(&page).display(), Some(DisplayMode::Block));

        page.scroll_to(400.0);
        assert_eq!(width(&page).as_deref(), Some("0%"));
        assert_eq!(button(&page).display(), Some(DisplayMode::None));
    }

    #[test]
    fn resize_realigns_button() {
        let page = puppet::Backend::article();
        let _attached = attach(page.clone(), &Config::default()).unwrap();

        page.query("main")
            .unwrap()
            .set_rect(BoundingRect::new(100.0, 800.0, 600.0, 2800.0));
        page.resize(700.0);
        assert_eq!(button(&page).get(StyleProperty::Left), Some("660px"));
    }

    #[test]
    fn writes_stream_in_order() {
        let page = puppet::Backend::article();
        let stream = page.stream();
        let _attached = attach(page.clone(), &Config::default()).unwrap();
        page.scroll_to(1800.0);

        let writes: Vec<String> = stream.try_iter().map(|w| w.to_string()).collect();
        assert_eq!(
            writes,
            [
                "#top-button { left: 920px }",
                "#top-button { display: block }",
                "#progress-bar { width: 50% }",
            ]
        );
    }

    #[test]
    fn basic_variant_ignores_resize() {
        let page = puppet::Backend::article();
        let attached = attach(page.clone(), &Config::new(Variant::Basic)).unwrap();
        assert_eq!(attached.readbar().events(), [PageEvent::Scroll]);
        assert_eq!(page.listener_count(), 1);

        page.dispatch(PageEvent::Resize);
        page.scroll_to(1800.0);
        assert_eq!(width(&page).as_deref(), Some("50%"));
        assert_eq!(button(&page).to_string(), "");
    }

    #[test]
    fn missing_element_fails_attach() {
        let page = puppet::Backend::article();
        page.remove_element("section.main-content");

        match attach(page.clone(), &Config::default()) {
            Err(Error::MissingElement { role, selector }) => {
                assert_eq!(role, Role::MainSection);
                assert_eq!(selector, "section.main-content");
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("attached without a main section"),
        }
        assert_eq!(page.listener_count(), 0);
    }

    #[test]
    fn detach_stops_updates() {
        let page = puppet::Backend::article();
        let attached = attach(page.clone(), &Config::default()).unwrap();
        assert_eq!(page.listener_count(), 2);

        page.scroll_to(1800.0);
        let readbar = attached.detach();
        assert_eq!(page.listener_count(), 0);

        page.scroll_to(0.0);
        assert_eq!(width(&page).as_deref(), Some("50%"));

        // Still usable by hand.
        readbar.on_event(PageEvent::Scroll);
        assert_eq!(width(&page).as_deref(), Some("0%"));
    }

    #[test]
    fn queued_events() {
        let page = puppet::Backend::article();
        let readbar = Readbar::new(page.clone(), &Config::default()).unwrap();

        page.scroll_to(1800.0);
        assert_eq!(width(&page), None);

        readbar.event_sink().send(PageEvent::Scroll).unwrap();
        readbar.event_sink().send(PageEvent::Resize).unwrap();
        assert_eq!(readbar.step(), 2);
        assert_eq!(readbar.step(), 0);
        assert_eq!(width(&page).as_deref(), Some("50%"));
    }
}
