//! # Readbar-core
//!
//! This library defines the core components for readbar, a reading progress
//! indicator driven by page scroll.
//!
//! It is independent from any actual document: layout and styling go through
//! the [`Page`](page::Page) and [`Element`](page::Element) traits, which
//! backends implement.
//!
//! If you are adding readbar to a web page, then [`readbar`] is probably what
//! you want.
//!
//! [`readbar`]: https://docs.rs/readbar
#![deny(missing_docs)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

pub mod config;
pub mod indicator;
pub mod logger;
pub mod page;
pub mod progress;
pub mod style;

mod error;
mod rect;
mod role;

pub use self::config::Config;
pub use self::error::Error;
pub use self::indicator::{resize_progress_bar_live, Indicator};
pub use self::page::{Element, EventSource, Page, PageEvent};
pub use self::progress::Progress;
pub use self::rect::BoundingRect;
pub use self::role::{Role, Roles, Variant};

/// Re-export crates used in the public API
pub mod reexports {
    pub use enum_map;
    pub use enumset;
    pub use log;
    pub use serde_json;
    pub use time;

    #[cfg(feature = "toml")]
    pub use toml;
}
