//! The scroll position indicator.
//!
//! An [`Indicator`] holds the elements it drives, looked up once when it is
//! attached to a page. Each handler then reads fresh layout values and writes
//! the resulting styles:
//!
//! * [`Indicator::resize_progress_bar`] runs on scroll: it sets the progress
//!   bar's width and, in the extended variant, shows the top button once the
//!   content has been scrolled into.
//! * [`Indicator::position_top_button`] runs on resize: it aligns the right
//!   edge of the top button with the right edge of the main content.
use crate::page::{Element, Page, PageEvent};
use crate::progress::{self, Progress};
use crate::style::{DisplayMode, Length, StyleProperty};
use crate::{Config, Error, Role, Variant};

struct TopButton<E> {
    button: E,
    // Required on the page, but nothing is read from it.
    _main_section: E,
}

/// Scroll position indicator bound to the elements of a page.
pub struct Indicator<P: Page> {
    page: P,
    variant: Variant,
    clamp_to_full: bool,
    main: P::Element,
    progress_bar: P::Element,
    top_button: Option<TopButton<P::Element>>,
}

fn find<P: Page>(page: &P, config: &Config, role: Role) -> Result<P::Element, Error> {
    let selector = config.selector(role);
    page.query(selector).ok_or_else(|| Error::MissingElement {
        role,
        selector: selector.to_string(),
    })
}

impl<P: Page> Indicator<P> {
    /// Looks up every element the configured variant needs.
    ///
    /// Fails with [`Error::MissingElement`] naming the first required element
    /// that is not on the page. Nothing is written to the page here.
    pub fn attach(page: P, config: &Config) -> Result<Self, Error> {
        let name = page.name().to_string();
        match Self::lookup(page, config) {
            Ok(indicator) => {
                log::debug!("Attached {:?} indicator to {name} page", indicator.variant);
                Ok(indicator)
            }
            Err(err) => {
                log::warn!("Cannot attach to {name} page: {err}");
                Err(err)
            }
        }
    }

    fn lookup(page: P, config: &Config) -> Result<Self, Error> {
        let variant = config.variant();

        let main = find(&page, config, Role::Main)?;
        let progress_bar = find(&page, config, Role::ProgressBar)?;
        let top_button = if variant.has_top_button() {
            let main_section = find(&page, config, Role::MainSection)?;
            let button = find(&page, config, Role::TopButton)?;
            Some(TopButton {
                button,
                _main_section: main_section,
            })
        } else {
            None
        };

        Ok(Indicator {
            page,
            variant,
            clamp_to_full: config.clamp_to_full(),
            main,
            progress_bar,
            top_button,
        })
    }

    /// Returns the page this indicator is attached to.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Returns the variant this indicator drives.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Computes the current progress without writing anything.
    pub fn progress(&self) -> Progress {
        let progress =
            progress::progress_of(self.main.bounding_rect(), self.page.viewport_height());
        if self.clamp_to_full {
            progress.clamped_to_full()
        } else {
            progress
        }
    }

    /// Updates the progress bar (and top button visibility) from the current
    /// scroll position.
    ///
    /// Returns the progress written to the bar.
    pub fn resize_progress_bar(&self) -> Progress {
        let progress = self.progress();

        if let Some(top_button) = &self.top_button {
            let display = DisplayMode::visible_if(!progress.is_zero());
            set_style(&top_button.button, StyleProperty::Display, display);
        }
        set_style(&self.progress_bar, StyleProperty::Width, progress.width());

        progress
    }

    /// Aligns the top button's right edge with the main content's right edge.
    ///
    /// Returns the offset written, or `None` if this variant has no top button.
    pub fn position_top_button(&self) -> Option<Length> {
        let top_button = self.top_button.as_ref()?;

        let right_of_main = self.main.bounding_rect().right();
        let width = top_button.button.bounding_rect().width();
        let left = progress::top_button_left(right_of_main, width);
        set_style(&top_button.button, StyleProperty::Left, left);

        Some(left)
    }

    /// Runs the handler for the given event.
    pub fn on_event(&self, event: PageEvent) {
        match event {
            PageEvent::Scroll => {
                self.resize_progress_bar();
            }
            PageEvent::Resize => {
                self.position_top_button();
            }
        }
    }

    /// Runs every handler, as if the page had just scrolled and resized.
    pub fn refresh(&self) {
        self.resize_progress_bar();
        self.position_top_button();
    }
}

fn set_style<E: Element, V: std::fmt::Display>(element: &E, property: StyleProperty, value: V) {
    let value = value.to_string();
    log::trace!("{property}: {value}");
    element.set_style(property, &value);
}

/// Looks up the elements and updates the progress bar in one go.
///
/// Nothing is kept between calls: a missing element only fails this call.
/// Meant to run on every scroll, so it only logs at trace level.
pub fn resize_progress_bar_live<P: Page>(page: &P, config: &Config) -> Result<Progress, Error> {
    match Indicator::lookup(page, config) {
        Ok(indicator) => Ok(indicator.resize_progress_bar()),
        Err(err) => {
            log::trace!("Skipping scroll on {} page: {err}", page.name());
            Err(err)
        }
    }
}
