//! # Readbar
//!
//! A reading progress bar for web pages: a bar whose width follows how far
//! the main content has been scrolled through, and an optional "back to top"
//! button that appears once reading started.
//!
//! ## Getting started
//!
//! * Build with the `wasm-backend` feature and call `start()` from the page,
//!   or use [`attach`] with a page backend of your own.
//! * The page must contain the elements the configuration names; by default
//!   `main`, `#progress-bar`, `section.main-content` and `#top-button`.
//!
//! ## Examples
//!
//! ```rust
//! use readbar::backends::puppet;
//! use readbar::style::StyleProperty;
//! use readbar::{Config, Page};
//!
//! let page = puppet::Backend::article();
//! let _attached = readbar::attach(page.clone(), &Config::default()).unwrap();
//!
//! page.scroll_to(1800.0);
//! let bar = page.query("#progress-bar").unwrap();
//! assert_eq!(bar.style().get(StyleProperty::Width), Some("50%"));
//! ```
#![deny(missing_docs)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

pub use readbar_core::*;

mod readbar;

pub mod backends;

pub use self::readbar::{attach, Attached, EventSink, Readbar};

#[cfg(feature = "wasm-backend")]
pub use self::backends::web::start;
