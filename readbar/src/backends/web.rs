//! Backend using the browser DOM.
#![cfg(feature = "wasm-backend")]
#![cfg_attr(feature = "doc-cfg", doc(cfg(feature = "wasm-backend")))]

use crate::page::{Element, EventSource, Page, PageEvent};
use crate::style::StyleProperty;
use crate::{config, logger, BoundingRect, Config, Error};
use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

/// Attribute on the root `<html>` element holding a JSON configuration.
pub const CONFIG_ATTRIBUTE: &str = "data-readbar";

/// Backend using the current window's document.
#[derive(Clone)]
pub struct Backend {
    window: Window,
    document: Document,
}

impl Backend {
    /// Creates a new page backend on the global window.
    pub fn init() -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;

        Ok(Backend { window, document })
    }

    /// Returns the document this backend reads from.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Reads the configuration from the root element's `data-readbar`
    /// attribute, or returns the default one.
    pub fn load_config(&self) -> Result<Config, Error> {
        let content = self
            .document
            .document_element()
            .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));

        match content {
            Some(content) => Ok(config::load_json(&content)?),
            None => Ok(config::load_default()),
        }
    }
}

/// Element of the browser DOM.
#[derive(Clone)]
pub struct WebElement(HtmlElement);

impl WebElement {
    /// Returns the underlying DOM element.
    pub fn html_element(&self) -> &HtmlElement {
        &self.0
    }
}

impl Element for WebElement {
    fn bounding_rect(&self) -> BoundingRect {
        let rect = self.0.get_bounding_client_rect();
        BoundingRect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn set_style(&self, property: StyleProperty, value: &str) {
        if let Err(err) = self.0.style().set_property(property.name(), value) {
            log::warn!("Could not set {property} to {value}: {err:?}");
        }
    }
}

impl Page for Backend {
    type Element = WebElement;

    fn viewport_height(&self) -> f64 {
        self.document
            .document_element()
            .map(|root| f64::from(root.client_height()))
            .unwrap_or_default()
    }

    fn query(&self, selector: &str) -> Option<WebElement> {
        let element = match self.document.query_selector(selector) {
            Ok(element) => element?,
            Err(err) => {
                log::warn!("Invalid selector `{selector}`: {err:?}");
                return None;
            }
        };

        match element.dyn_into::<HtmlElement>() {
            Ok(element) => Some(WebElement(element)),
            Err(_) => {
                log::warn!("`{selector}` is not an HTML element");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "web"
    }
}

impl EventSource for Backend {
    type Listener = EventListener;

    fn listen(&self, event: PageEvent, callback: Box<dyn Fn()>) -> EventListener {
        EventListener::new(&self.window, event.dom_type(), move |_| callback())
    }
}

/// Attaches readbar to the current page.
///
/// Reads the configuration from the `data-readbar` attribute of the `<html>`
/// element if present. The subscriptions last for the lifetime of the page.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    // Another logger may already be installed by the host.
    let _ = logger::init(log::LevelFilter::Debug);

    let page = Backend::init().map_err(to_js)?;
    let config = page.load_config().map_err(to_js)?;
    crate::attach(page, &config).map_err(to_js)?.forget();

    Ok(())
}

/// Returns the recent log records, one per line.
#[wasm_bindgen]
pub fn logs() -> String {
    logger::records()
        .iter()
        .map(logger::Record::line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
