//! Errors returned while setting up an indicator.
use crate::config;
use crate::Role;
use std::fmt;

/// Error raised when an indicator cannot be set up.
///
/// Once an indicator is attached, handling events cannot fail.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A required element was not found on the page.
    MissingElement {
        /// Part the element should play
        role: Role,
        /// Selector that matched nothing
        selector: String,
    },

    /// There is no global window (not running in a browser).
    NoWindow,

    /// The window has no document.
    NoDocument,

    /// The configuration could not be loaded.
    Config(config::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingElement { role, selector } => {
                write!(f, "required element `{role}` not found (selector `{selector}`)")
            }
            Error::NoWindow => write!(f, "no global window"),
            Error::NoDocument => write!(f, "window has no document"),
            Error::Config(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<config::Error> for Error {
    fn from(err: config::Error) -> Self {
        Error::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::Role;

    #[test]
    fn names_the_missing_element() {
        let err = Error::MissingElement {
            role: Role::TopButton,
            selector: "#top-button".into(),
        };
        assert_eq!(
            err.to_string(),
            "required element `top_button` not found (selector `#top-button`)"
        );
    }
}
