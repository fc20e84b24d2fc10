//! Define page backends.
//!
//! Readbar doesn't measure or style anything by itself: it delegates this job
//! to a page backend, which talks to the actual document.
//!
//! This module defines a few implementations of the [`Page`] trait. Some need
//! a corresponding feature to be enabled.
//!
//! [`Page`]: crate::page::Page
pub mod puppet;
pub mod web;
